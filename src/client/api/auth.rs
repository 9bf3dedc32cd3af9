use crate::{
    client::{
        api::{
            client::ApiClient,
            helper::RequestOptions,
            transport::{HttpTransport, TokenStore},
        },
        model::error::ApiError,
    },
    model::{
        api::MessageResponseDto,
        auth::{
            ForgotPasswordDto, LoginRequestDto, LoginResponseDto, OtpResponseDto, RequestOtpDto,
            SignupRequestDto, SignupResponseDto, VerifyOtpDto,
        },
    },
};

impl<T: HttpTransport, S: TokenStore> ApiClient<T, S> {
    pub async fn login(&self, payload: &LoginRequestDto) -> Result<LoginResponseDto, ApiError> {
        self.request_json("/auth/login", RequestOptions::post_json(payload)?)
            .await
    }

    pub async fn signup(&self, payload: &SignupRequestDto) -> Result<SignupResponseDto, ApiError> {
        self.request_json("/auth/signup", RequestOptions::post_json(payload)?)
            .await
    }

    /// Ask the backend to email a one-time code.
    pub async fn request_otp(&self, payload: &RequestOtpDto) -> Result<OtpResponseDto, ApiError> {
        self.request_json("/auth/request-otp", RequestOptions::post_json(payload)?)
            .await
    }

    pub async fn verify_otp(&self, payload: &VerifyOtpDto) -> Result<OtpResponseDto, ApiError> {
        self.request_json("/auth/verify-otp", RequestOptions::post_json(payload)?)
            .await
    }

    /// Replace the password of the account registered under `payload.email`.
    pub async fn forgot_password(
        &self,
        payload: &ForgotPasswordDto,
    ) -> Result<MessageResponseDto, ApiError> {
        self.request_json("/auth/forgot-password", RequestOptions::post_json(payload)?)
            .await
    }
}

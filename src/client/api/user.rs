use crate::{
    client::{
        api::{
            client::ApiClient,
            helper::RequestOptions,
            transport::{HttpTransport, TokenStore},
        },
        model::error::ApiError,
    },
    model::user::UsersResponseDto,
};

impl<T: HttpTransport, S: TokenStore> ApiClient<T, S> {
    /// List users visible to the current token.
    pub async fn get_users(&self) -> Result<UsersResponseDto, ApiError> {
        self.request_json("/auth/getUsers", RequestOptions::get())
            .await
    }
}

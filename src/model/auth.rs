use serde::{Deserialize, Serialize};

use crate::model::user::UserDto;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LoginRequestDto {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct LoginResponseDto {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<UserDto>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SignupRequestDto {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct SignupResponseDto {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user: Option<UserDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RequestOtpDto {
    pub email: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct VerifyOtpDto {
    pub email: String,
    pub otp: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct OtpResponseDto {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub verified: Option<bool>,
    #[serde(default)]
    pub token: Option<String>,
}

/// Body of `/auth/forgot-password`: the account email and its replacement password.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ForgotPasswordDto {
    pub email: String,
    pub new_password: String,
}

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
        category::{
            CategoriesResponseDto, CategoryRemoval, CategoryResponseDto, CreateUpdateCategoryDto,
            SoftDeleteOrDetachDto,
        },
    },
};

impl<T: HttpTransport, S: TokenStore> ApiClient<T, S> {
    /// Create a category, or update it when `payload.id` is set
    pub async fn create_update_category(
        &self,
        payload: &CreateUpdateCategoryDto,
    ) -> Result<CategoryResponseDto, ApiError> {
        self.request_json(
            "/category/createUpdateCategory",
            RequestOptions::post_json(payload)?,
        )
        .await
    }

    /// Soft delete a category or detach it from its parent
    pub async fn soft_delete_or_detach_category(
        &self,
        category_id: i64,
        action: CategoryRemoval,
    ) -> Result<MessageResponseDto, ApiError> {
        let payload = SoftDeleteOrDetachDto {
            category_id,
            action,
        };

        self.request_json(
            "/category/softDeleteOrDetach",
            RequestOptions::post_json(&payload)?,
        )
        .await
    }

    pub async fn get_all_categories(&self) -> Result<CategoriesResponseDto, ApiError> {
        self.request_json("/category/getAll", RequestOptions::get())
            .await
    }

    /// Get top-level categories only
    pub async fn get_parent_categories(&self) -> Result<CategoriesResponseDto, ApiError> {
        self.request_json("/category/getOnlyParentCategories", RequestOptions::get())
            .await
    }

    /// Get the direct children of a category
    pub async fn get_sub_categories(
        &self,
        parent_id: i64,
    ) -> Result<CategoriesResponseDto, ApiError> {
        let url = format!("/category/getSubCategories/{}", parent_id);

        self.request_json(&url, RequestOptions::get()).await
    }
}

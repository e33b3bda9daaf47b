use crate::{
    error::Error,
    model::hotel::{
        CategoryDto, CategoryRequest, HotelDto, HotelRequest, PlanDto, PlanRequest,
    },
    service::{
        api::{Access, ApiService},
        storage::SessionStorage,
        transport::{HttpTransport, Method},
    },
};

impl<T, S> ApiService<T, S>
where
    T: HttpTransport,
    S: SessionStorage,
{
    pub async fn get_hotels(&self) -> Result<Vec<HotelDto>, Error> {
        self.get_json("/hotels", Access::Authenticated).await
    }

    pub async fn get_hotel(&self, hotel_id: i64) -> Result<HotelDto, Error> {
        self.get_json(&format!("/hotels/{}", hotel_id), Access::Authenticated)
            .await
    }

    pub async fn create_hotel(&self, request: &HotelRequest) -> Result<HotelDto, Error> {
        self.send_json(Method::Post, "/hotels", Access::Authenticated, request)
            .await
    }

    pub async fn update_hotel(
        &self,
        hotel_id: i64,
        request: &HotelRequest,
    ) -> Result<HotelDto, Error> {
        self.send_json(
            Method::Put,
            &format!("/hotels/{}", hotel_id),
            Access::Authenticated,
            request,
        )
        .await
    }

    pub async fn delete_hotel(&self, hotel_id: i64) -> Result<(), Error> {
        self.send_empty(Method::Delete, &format!("/hotels/{}", hotel_id))
            .await
    }

    /// Subscription plans. Public so the registration page can offer them.
    pub async fn get_plans(&self) -> Result<Vec<PlanDto>, Error> {
        self.get_json("/plans", Access::Public).await
    }

    pub async fn create_plan(&self, request: &PlanRequest) -> Result<PlanDto, Error> {
        self.send_json(Method::Post, "/plans", Access::Authenticated, request)
            .await
    }

    pub async fn update_plan(&self, plan_id: i64, request: &PlanRequest) -> Result<PlanDto, Error> {
        self.send_json(
            Method::Put,
            &format!("/plans/{}", plan_id),
            Access::Authenticated,
            request,
        )
        .await
    }

    pub async fn delete_plan(&self, plan_id: i64) -> Result<(), Error> {
        self.send_empty(Method::Delete, &format!("/plans/{}", plan_id))
            .await
    }

    /// Issue categories. Public so guests can pick one when reporting.
    pub async fn get_categories(&self) -> Result<Vec<CategoryDto>, Error> {
        self.get_json("/categories", Access::Public).await
    }

    pub async fn create_category(&self, request: &CategoryRequest) -> Result<CategoryDto, Error> {
        self.send_json(Method::Post, "/categories", Access::Authenticated, request)
            .await
    }

    pub async fn update_category(
        &self,
        category_id: i64,
        request: &CategoryRequest,
    ) -> Result<CategoryDto, Error> {
        self.send_json(
            Method::Put,
            &format!("/categories/{}", category_id),
            Access::Authenticated,
            request,
        )
        .await
    }

    pub async fn delete_category(&self, category_id: i64) -> Result<(), Error> {
        self.send_empty(Method::Delete, &format!("/categories/{}", category_id))
            .await
    }
}

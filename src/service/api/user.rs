use crate::{
    error::Error,
    model::user::{TechnicianDto, TechnicianRequest},
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
    pub async fn get_hotel_technicians(&self, hotel_id: i64) -> Result<Vec<TechnicianDto>, Error> {
        self.get_json(
            &format!("/users/hotel/{}/technicians", hotel_id),
            Access::Authenticated,
        )
        .await
    }

    pub async fn create_technician(
        &self,
        request: &TechnicianRequest,
    ) -> Result<TechnicianDto, Error> {
        self.send_json(
            Method::Post,
            "/users/technicians",
            Access::Authenticated,
            request,
        )
        .await
    }

    pub async fn delete_user(&self, user_id: i64) -> Result<(), Error> {
        self.send_empty(Method::Delete, &format!("/users/{}", user_id))
            .await
    }
}

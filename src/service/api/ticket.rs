use crate::{
    error::Error,
    model::ticket::{
        CommentDto, CreateCommentRequest, CreatePublicTicketRequest, ImageUpload, TicketDto,
        TicketStatus, UpdateStatusRequest,
    },
    service::{
        api::{encode_segment, image_parts, with_query, Access, ApiService},
        storage::SessionStorage,
        transport::{HttpTransport, Method, MultipartPart},
    },
};

impl<T, S> ApiService<T, S>
where
    T: HttpTransport,
    S: SessionStorage,
{
    /// All tickets of one hotel, as seen by its admin
    pub async fn get_hotel_tickets(&self, hotel_id: i64) -> Result<Vec<TicketDto>, Error> {
        self.get_json(&format!("/tickets/hotel/{}", hotel_id), Access::Authenticated)
            .await
    }

    /// Tickets assigned to one technician
    pub async fn get_technician_tickets(&self, user_id: i64) -> Result<Vec<TicketDto>, Error> {
        self.get_json(
            &format!("/tickets/technician/{}", user_id),
            Access::Authenticated,
        )
        .await
    }

    pub async fn get_ticket(&self, ticket_id: i64) -> Result<TicketDto, Error> {
        self.get_json(&format!("/tickets/{}", ticket_id), Access::Authenticated)
            .await
    }

    /// Look up a ticket by the number handed to the guest who reported it
    pub async fn get_public_ticket(&self, ticket_number: &str) -> Result<TicketDto, Error> {
        let path = format!("/tickets/public/{}", encode_segment(ticket_number.trim()));

        self.get_json(&path, Access::Public).await
    }

    /// Report an issue as a guest.
    ///
    /// Sent as multipart: the ticket itself as a JSON blob in the `ticket` part, followed by
    /// one `images` part per attached file.
    pub async fn create_public_ticket(
        &self,
        request: &CreatePublicTicketRequest,
        images: &[ImageUpload],
    ) -> Result<TicketDto, Error> {
        let mut parts = vec![MultipartPart {
            name: "ticket".to_string(),
            file_name: None,
            content_type: "application/json".to_string(),
            bytes: serde_json::to_vec(request)?,
        }];
        parts.extend(image_parts(images));

        self.send_multipart("/tickets/public", Access::Public, parts)
            .await
    }

    /// Move a ticket to a new status on behalf of `user_id`
    pub async fn update_ticket_status(
        &self,
        ticket_id: i64,
        status: TicketStatus,
        user_id: i64,
    ) -> Result<TicketDto, Error> {
        let path = with_query(
            &format!("/tickets/{}/status", ticket_id),
            &[("userId", user_id.to_string())],
        );

        self.send_json(
            Method::Patch,
            &path,
            Access::Authenticated,
            &UpdateStatusRequest { status },
        )
        .await
    }

    /// Move a ticket along its lifecycle, refusing transitions the lifecycle doesn't allow
    /// before anything is sent.
    pub async fn transition_ticket(
        &self,
        ticket: &TicketDto,
        next: TicketStatus,
        user_id: i64,
    ) -> Result<TicketDto, Error> {
        if !ticket.status.can_transition_to(next) {
            return Err(Error::InvalidTransition {
                from: ticket.status,
                to: next,
            });
        }

        self.update_ticket_status(ticket.id, next, user_id).await
    }

    pub async fn assign_ticket(
        &self,
        ticket_id: i64,
        technician_id: i64,
        user_id: i64,
    ) -> Result<TicketDto, Error> {
        let path = with_query(
            &format!("/tickets/{}/assign", ticket_id),
            &[
                ("technicianId", technician_id.to_string()),
                ("userId", user_id.to_string()),
            ],
        );

        self.send_bare(Method::Patch, &path).await
    }

    /// Attach more images to an existing ticket
    pub async fn upload_ticket_images(
        &self,
        ticket_id: i64,
        images: &[ImageUpload],
    ) -> Result<TicketDto, Error> {
        if images.is_empty() {
            return Err(Error::ParseError("No images selected".to_string()));
        }

        self.send_multipart(
            &format!("/tickets/{}/images", ticket_id),
            Access::Authenticated,
            image_parts(images),
        )
        .await
    }

    pub async fn delete_ticket_image(&self, ticket_id: i64, image_id: i64) -> Result<(), Error> {
        let path = with_query(
            &format!("/tickets/{}/images", ticket_id),
            &[("imageId", image_id.to_string())],
        );

        self.send_empty(Method::Delete, &path).await
    }

    pub async fn get_ticket_comments(&self, ticket_id: i64) -> Result<Vec<CommentDto>, Error> {
        self.get_json(
            &format!("/tickets/{}/comments", ticket_id),
            Access::Authenticated,
        )
        .await
    }

    pub async fn add_ticket_comment(
        &self,
        ticket_id: i64,
        request: &CreateCommentRequest,
    ) -> Result<CommentDto, Error> {
        self.send_json(
            Method::Post,
            &format!("/tickets/{}/comments", ticket_id),
            Access::Authenticated,
            request,
        )
        .await
    }
}

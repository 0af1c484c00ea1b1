use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::{
    data::{event::EventRepository, invitation::InvitationRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::{
        event::Event,
        invitation::{
            Invitation, InvitationDto, InvitationStatus, IssueInvitationParam,
            PaginatedInvitationsDto,
        },
        user::User,
    },
    service::notify::Notifier,
};

pub struct InvitationService<'a> {
    db: &'a DatabaseConnection,
    notifier: &'a dyn Notifier,
}

impl<'a> InvitationService<'a> {
    pub fn new(db: &'a DatabaseConnection, notifier: &'a dyn Notifier) -> Self {
        Self { db, notifier }
    }

    /// Issues an invitation relating a user to an event.
    ///
    /// Runs the fixed step sequence: authorize, build, persist, dispatch. A failing
    /// step aborts the remaining ones. The notification dispatch is best-effort and
    /// never fails the operation.
    ///
    /// # Arguments
    /// - `acting_user`: The authenticated user performing the operation
    /// - `param`: Issue parameters naming the event and invitee
    ///
    /// # Returns
    /// - `Ok(InvitationDto)`: The issued invitation with enriched data
    /// - `Err(AppError)`: Authorization, validation or database error
    pub async fn issue(
        &self,
        acting_user: &User,
        param: IssueInvitationParam,
    ) -> Result<InvitationDto, AppError> {
        let event = self.authorize_owner(acting_user, param.event_id).await?;

        let invitee = self.build(&event, param.invitee_id).await?;

        let invitation = self.persist(&event, &invitee).await?;

        self.dispatch_issued(&invitation, &event, &invitee).await;

        Ok(invitation.into_dto(event.name, invitee.name))
    }

    /// Accepts a pending invitation.
    ///
    /// Only the invitee may respond, and only once.
    ///
    /// # Returns
    /// - `Ok(InvitationDto)`: The accepted invitation
    /// - `Err(AppError)`: Authorization or validation error, or invitation not found
    pub async fn accept(
        &self,
        acting_user: &User,
        invitation_id: i32,
    ) -> Result<InvitationDto, AppError> {
        self.respond(acting_user, invitation_id, InvitationStatus::Accepted)
            .await
    }

    /// Declines a pending invitation.
    ///
    /// Only the invitee may respond, and only once.
    ///
    /// # Returns
    /// - `Ok(InvitationDto)`: The declined invitation
    /// - `Err(AppError)`: Authorization or validation error, or invitation not found
    pub async fn decline(
        &self,
        acting_user: &User,
        invitation_id: i32,
    ) -> Result<InvitationDto, AppError> {
        self.respond(acting_user, invitation_id, InvitationStatus::Declined)
            .await
    }

    /// Gets a page of the acting user's own invitations, enriched with event names.
    ///
    /// # Arguments
    /// - `acting_user`: The authenticated user
    /// - `page`: Page number (0-indexed)
    /// - `per_page`: Number of items per page
    ///
    /// # Returns
    /// - `Ok(PaginatedInvitationsDto)`: Paginated invitation list
    /// - `Err(AppError)`: Database error
    pub async fn get_for_user(
        &self,
        acting_user: &User,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedInvitationsDto, AppError> {
        let repo = InvitationRepository::new(self.db);
        let event_repo = EventRepository::new(self.db);

        let (invitations, total) = repo
            .get_by_user_paginated(acting_user.id, page, per_page)
            .await?;

        let total_pages = if per_page > 0 {
            (total as f64 / per_page as f64).ceil() as u64
        } else {
            0
        };

        // Enrich invitations with event names
        let mut invitation_list = Vec::new();

        for invitation in invitations {
            let event = event_repo.get_by_id(invitation.event_id).await?;

            if let Some(event) = event {
                invitation_list.push(invitation.into_dto(event.name, acting_user.name.clone()));
            }
        }

        Ok(PaginatedInvitationsDto {
            invitations: invitation_list,
            total,
            page,
            per_page,
            total_pages,
        })
    }

    /// Gets all invitations for an event, enriched with invitee names.
    ///
    /// Only the event owner may list an event's invitations.
    ///
    /// # Returns
    /// - `Ok(Vec<InvitationDto>)`: Invitations for the event
    /// - `Err(AppError)`: Authorization or database error, or event not found
    pub async fn get_for_event(
        &self,
        acting_user: &User,
        event_id: i32,
    ) -> Result<Vec<InvitationDto>, AppError> {
        let event = self.authorize_owner(acting_user, event_id).await?;

        let repo = InvitationRepository::new(self.db);
        let user_repo = UserRepository::new(self.db);

        let invitations = repo.get_by_event(event.id).await?;

        let mut invitation_list = Vec::new();

        for invitation in invitations {
            let invitee = user_repo.find_by_id(invitation.user_id).await?;

            if let Some(invitee) = invitee {
                invitation_list.push(invitation.into_dto(event.name.clone(), invitee.name));
            }
        }

        Ok(invitation_list)
    }

    /// Authorize step: the event must exist and the acting user must own it.
    async fn authorize_owner(&self, acting_user: &User, event_id: i32) -> Result<Event, AppError> {
        let event = EventRepository::new(self.db)
            .get_by_id(event_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Event not found".to_string()))?;

        if event.owner_id != acting_user.id {
            return Err(AuthError::AccessDenied(
                acting_user.id,
                format!(
                    "User attempted to manage invitations for event {} they do not own",
                    event.id
                ),
            )
            .into());
        }

        Ok(event)
    }

    /// Build step: the invitee must exist and must not already be invited.
    async fn build(&self, event: &Event, invitee_id: i32) -> Result<User, AppError> {
        let invitee = UserRepository::new(self.db)
            .find_by_id(invitee_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let existing = InvitationRepository::new(self.db)
            .get_by_event_and_user(event.id, invitee.id)
            .await?;

        if existing.is_some() {
            return Err(AppError::Validation(
                "User has already been invited to this event".to_string(),
            ));
        }

        Ok(invitee)
    }

    /// Persist step: commits the pending invitation to the store.
    async fn persist(&self, event: &Event, invitee: &User) -> Result<Invitation, AppError> {
        let invitation = InvitationRepository::new(self.db)
            .create(event.id, invitee.id)
            .await?;

        Ok(invitation)
    }

    /// Dispatch step: announces the issued invitation.
    ///
    /// Best-effort: a failed announcement is logged and never rolls back the
    /// persisted invitation.
    async fn dispatch_issued(&self, invitation: &Invitation, event: &Event, invitee: &User) {
        if let Err(err) = self
            .notifier
            .invitation_issued(invitation, event, invitee)
            .await
        {
            tracing::warn!(
                "Failed to deliver notification for invitation {}: {}",
                invitation.id,
                err
            );
        }
    }

    /// Transitions a pending invitation to the given terminal state.
    async fn respond(
        &self,
        acting_user: &User,
        invitation_id: i32,
        response: InvitationStatus,
    ) -> Result<InvitationDto, AppError> {
        let repo = InvitationRepository::new(self.db);

        let invitation = repo
            .get_by_id(invitation_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Invitation not found".to_string()))?;

        if invitation.user_id != acting_user.id {
            return Err(AuthError::AccessDenied(
                acting_user.id,
                format!(
                    "User attempted to respond to invitation {} issued to another user",
                    invitation.id
                ),
            )
            .into());
        }

        if invitation.status != InvitationStatus::Pending {
            return Err(AppError::Validation(
                "Invitation has already been responded to".to_string(),
            ));
        }

        let updated = repo
            .set_status(invitation.id, response, Utc::now())
            .await?
            .ok_or_else(|| AppError::NotFound("Invitation not found".to_string()))?;

        let event = EventRepository::new(self.db)
            .get_by_id(updated.event_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Event not found".to_string()))?;

        Ok(updated.into_dto(event.name, acting_user.name.clone()))
    }
}

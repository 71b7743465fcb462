use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::receptionist::{CreateReceptionistDto, ReceptionistDto, UpdateReceptionistDto},
    server::{
        data::receptionist::ReceptionistRepository,
        error::AppError,
        model::{
            account::NewAccount,
            receptionist::{NewReceptionist, ReceptionistUpdate},
        },
        service::account::AccountService,
    },
};
use entity::enums::{Status, UserRole};

/// Front-desk staff management. Each receptionist row has a RECEPTIONIST
/// credential account linked by email; deactivation and reinstatement keep
/// the two in sync inside one transaction.
pub struct ReceptionistService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReceptionistService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Onboards a receptionist together with their credential account.
    pub async fn create_receptionist(
        &self,
        dto: CreateReceptionistDto,
    ) -> Result<ReceptionistDto, AppError> {
        let txn = self.db.begin().await?;

        let repo = ReceptionistRepository::new(&txn);
        if repo.find_by_email(&dto.email).await?.is_some() {
            return Err(AppError::Duplicate(format!(
                "Receptionist with email {} already exists",
                dto.email
            )));
        }

        AccountService::new(&txn)
            .create_account(NewAccount {
                email: dto.email.clone(),
                password: dto.password,
                role: UserRole::Receptionist,
                status: Status::Active,
            })
            .await?;

        let receptionist = repo
            .insert(NewReceptionist {
                email: dto.email,
                first_name: dto.first_name,
                last_name: dto.last_name,
                phone: dto.phone,
                shift: dto.shift,
                date_of_joining: dto.date_of_joining,
                salary: dto.salary,
            })
            .await?;

        txn.commit().await?;
        Ok(ReceptionistDto::from(receptionist))
    }

    pub async fn get_receptionist(&self, id: i32) -> Result<ReceptionistDto, AppError> {
        let receptionist = ReceptionistRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Receptionist with id {} not found", id))
            })?;
        Ok(ReceptionistDto::from(receptionist))
    }

    pub async fn list_receptionists(&self) -> Result<Vec<ReceptionistDto>, AppError> {
        let receptionists = ReceptionistRepository::new(self.db).find_all().await?;
        Ok(receptionists.into_iter().map(Into::into).collect())
    }

    /// Partial update of the staff row. The email never changes here, so
    /// the credential link stays intact.
    pub async fn update_receptionist(
        &self,
        id: i32,
        dto: UpdateReceptionistDto,
    ) -> Result<ReceptionistDto, AppError> {
        let repo = ReceptionistRepository::new(self.db);
        let receptionist = repo.find_by_id(id).await?.ok_or_else(|| {
            AppError::NotFound(format!("Receptionist with id {} not found", id))
        })?;

        let receptionist = repo
            .update(
                receptionist,
                ReceptionistUpdate {
                    first_name: dto.first_name,
                    last_name: dto.last_name,
                    phone: dto.phone,
                    shift: dto.shift,
                    date_of_joining: dto.date_of_joining,
                    salary: dto.salary,
                },
            )
            .await?;
        Ok(ReceptionistDto::from(receptionist))
    }

    /// Soft delete: the staff row and its credential account both go
    /// INACTIVE. The rows stay in place.
    pub async fn delete_receptionist(&self, id: i32) -> Result<(), AppError> {
        self.set_status(id, Status::Inactive).await?;
        Ok(())
    }

    /// Reinstates the receptionist and re-enables their account.
    pub async fn activate_receptionist(&self, id: i32) -> Result<ReceptionistDto, AppError> {
        self.set_status(id, Status::Active).await
    }

    /// Takes the receptionist off duty and disables their account.
    pub async fn deactivate_receptionist(&self, id: i32) -> Result<ReceptionistDto, AppError> {
        self.set_status(id, Status::Inactive).await
    }

    async fn set_status(&self, id: i32, status: Status) -> Result<ReceptionistDto, AppError> {
        let txn = self.db.begin().await?;

        let repo = ReceptionistRepository::new(&txn);
        let receptionist = repo.find_by_id(id).await?.ok_or_else(|| {
            AppError::NotFound(format!("Receptionist with id {} not found", id))
        })?;

        let receptionist = repo.set_status(receptionist, status).await?;

        let accounts = AccountService::new(&txn);
        match status {
            Status::Active => accounts.activate_by_email(&receptionist.email).await?,
            Status::Inactive => accounts.deactivate_by_email(&receptionist.email).await?,
        }

        txn.commit().await?;
        Ok(ReceptionistDto::from(receptionist))
    }
}

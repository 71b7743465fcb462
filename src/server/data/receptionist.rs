use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::receptionist::{NewReceptionist, ReceptionistUpdate};
use entity::enums::Status;

pub struct ReceptionistRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ReceptionistRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn insert(
        &self,
        params: NewReceptionist,
    ) -> Result<entity::receptionist::Model, DbErr> {
        entity::receptionist::ActiveModel {
            email: ActiveValue::Set(params.email),
            first_name: ActiveValue::Set(params.first_name),
            last_name: ActiveValue::Set(params.last_name),
            phone: ActiveValue::Set(params.phone),
            shift: ActiveValue::Set(params.shift),
            date_of_joining: ActiveValue::Set(params.date_of_joining),
            salary: ActiveValue::Set(params.salary),
            status: ActiveValue::Set(Status::Active),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::receptionist::Model>, DbErr> {
        entity::prelude::Receptionist::find_by_id(id)
            .one(self.db)
            .await
    }

    pub async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<entity::receptionist::Model>, DbErr> {
        entity::prelude::Receptionist::find()
            .filter(entity::receptionist::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    pub async fn find_all(&self) -> Result<Vec<entity::receptionist::Model>, DbErr> {
        entity::prelude::Receptionist::find()
            .order_by_asc(entity::receptionist::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn set_status(
        &self,
        receptionist: entity::receptionist::Model,
        status: Status,
    ) -> Result<entity::receptionist::Model, DbErr> {
        let mut active: entity::receptionist::ActiveModel = receptionist.into();
        active.status = ActiveValue::Set(status);
        active.update(self.db).await
    }

    /// Applies a partial update; `None` fields keep their stored value.
    pub async fn update(
        &self,
        receptionist: entity::receptionist::Model,
        params: ReceptionistUpdate,
    ) -> Result<entity::receptionist::Model, DbErr> {
        let mut active: entity::receptionist::ActiveModel = receptionist.into();
        if let Some(first_name) = params.first_name {
            active.first_name = ActiveValue::Set(first_name);
        }
        if let Some(last_name) = params.last_name {
            active.last_name = ActiveValue::Set(last_name);
        }
        if let Some(phone) = params.phone {
            active.phone = ActiveValue::Set(Some(phone));
        }
        if let Some(shift) = params.shift {
            active.shift = ActiveValue::Set(shift);
        }
        if let Some(date_of_joining) = params.date_of_joining {
            active.date_of_joining = ActiveValue::Set(date_of_joining);
        }
        if let Some(salary) = params.salary {
            active.salary = ActiveValue::Set(salary);
        }
        active.update(self.db).await
    }
}

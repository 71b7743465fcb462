use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::server::model::member::{FitnessProfileUpdate, NewFitnessProfile};

pub struct FitnessProfileRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FitnessProfileRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn insert(
        &self,
        params: NewFitnessProfile,
    ) -> Result<entity::fitness_profile::Model, DbErr> {
        entity::fitness_profile::ActiveModel {
            member_id: ActiveValue::Set(params.member_id),
            height: ActiveValue::Set(params.height),
            weight: ActiveValue::Set(params.weight),
            medical_conditions: ActiveValue::Set(params.medical_conditions),
            injuries: ActiveValue::Set(params.injuries),
            allergies: ActiveValue::Set(params.allergies),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_member_id(
        &self,
        member_id: i32,
    ) -> Result<Option<entity::fitness_profile::Model>, DbErr> {
        entity::prelude::FitnessProfile::find()
            .filter(entity::fitness_profile::Column::MemberId.eq(member_id))
            .one(self.db)
            .await
    }

    /// Applies a partial update; `None` fields keep their stored value.
    pub async fn update(
        &self,
        profile: entity::fitness_profile::Model,
        params: FitnessProfileUpdate,
    ) -> Result<entity::fitness_profile::Model, DbErr> {
        let mut active: entity::fitness_profile::ActiveModel = profile.into();
        if let Some(height) = params.height {
            active.height = ActiveValue::Set(height);
        }
        if let Some(weight) = params.weight {
            active.weight = ActiveValue::Set(weight);
        }
        if let Some(medical_conditions) = params.medical_conditions {
            active.medical_conditions = ActiveValue::Set(Some(medical_conditions));
        }
        if let Some(injuries) = params.injuries {
            active.injuries = ActiveValue::Set(Some(injuries));
        }
        if let Some(allergies) = params.allergies {
            active.allergies = ActiveValue::Set(Some(allergies));
        }
        active.update(self.db).await
    }
}

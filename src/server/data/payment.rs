use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::member::NewPayment;

pub struct PaymentRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PaymentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn insert(&self, params: NewPayment) -> Result<entity::payment::Model, DbErr> {
        entity::payment::ActiveModel {
            member_id: ActiveValue::Set(params.member_id),
            amount_paid: ActiveValue::Set(params.amount_paid),
            payment_date: ActiveValue::Set(params.payment_date),
            payment_method: ActiveValue::Set(params.payment_method),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_member(
        &self,
        member_id: i32,
    ) -> Result<Vec<entity::payment::Model>, DbErr> {
        entity::prelude::Payment::find()
            .filter(entity::payment::Column::MemberId.eq(member_id))
            .order_by_desc(entity::payment::Column::PaymentDate)
            .all(self.db)
            .await
    }

    /// Payments for one member with a payment date in `[start, end]`.
    pub async fn find_by_member_between(
        &self,
        member_id: i32,
        start: chrono::NaiveDate,
        end: chrono::NaiveDate,
    ) -> Result<Vec<entity::payment::Model>, DbErr> {
        entity::prelude::Payment::find()
            .filter(entity::payment::Column::MemberId.eq(member_id))
            .filter(entity::payment::Column::PaymentDate.between(start, end))
            .order_by_desc(entity::payment::Column::PaymentDate)
            .all(self.db)
            .await
    }
}

//! Subscriptions module - recurring payments.

mod subscriptions_model;

pub use subscriptions_model::{
    NewSubscription, Subscription, SubscriptionPayload, SubscriptionUpdate,
};

use crate::store::EntityService;

pub type SubscriptionService = EntityService<Subscription>;

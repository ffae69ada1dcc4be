//! Goals module - savings goals and their progress.

mod goals_model;


pub use goals_model::{FinancialGoal, FinancialGoalPayload, FinancialGoalUpdate, NewFinancialGoal};

use crate::store::EntityService;

pub type GoalService = EntityService<FinancialGoal>;

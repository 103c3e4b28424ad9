pub mod actions;
pub mod cases;
pub mod entities;
pub mod integrations;
pub mod invoke;
pub mod scopes;

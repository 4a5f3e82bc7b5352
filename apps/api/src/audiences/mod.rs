// Audience intake: validation of form input and the create-and-generate workflow.

pub mod handlers;
pub mod intake;
pub mod validation;

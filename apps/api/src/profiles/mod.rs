// Candidate data: profiles with their social links, education and experience.

pub mod handlers;
pub mod store;
pub mod validation;

// Business domains
pub mod agents;
pub mod cold_email;
pub mod motivation;

mod home;
mod new_project;
mod results;

pub use home::Home;
pub use new_project::NewProject;
pub use results::Results;

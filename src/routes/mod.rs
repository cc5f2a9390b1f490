pub mod announcements;

pub mod auth;

pub mod courses;

pub mod marks;

pub mod materials;

pub mod users;

pub use announcements::configure_announcement_routes;
pub use auth::configure_auth_routes;
pub use courses::configure_course_routes;
pub use marks::configure_mark_routes;
pub use materials::configure_material_routes;
pub use users::configure_user_routes;

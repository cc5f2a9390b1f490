pub mod announcements;
pub mod auth;
pub mod courses;
pub mod marks;
pub mod materials;
pub mod users;

pub use announcements::AnnouncementService;
pub use auth::AuthService;
pub use courses::CourseService;
pub use marks::MarkService;
pub use materials::MaterialService;
pub use users::UserService;

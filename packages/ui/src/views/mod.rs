mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod loading;
pub use loading::{LoadingScreen, MealListSkeleton};

mod auth_shell;
pub use auth_shell::AuthShell;

mod sign_in;
pub use sign_in::SignInView;

mod sign_up;
pub use sign_up::SignUpView;

mod home;
pub use home::HomeView;

mod statistics;
pub use statistics::StatisticsView;

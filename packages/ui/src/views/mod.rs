mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod dashboard;
pub use dashboard::DashboardView;

//! Application layer use cases.
//!
//! - **`carousel`** – Moves the slide strip one slide left or right.
//! - **`register`** – Submits the registration form to the server and shows the
//!   outcome.
//! - **`menu`** – Shows or hides a menu.
//! - **`exams`** – Records an exam for a registered patient.
//!
//! Each page use case talks to the document through the [`Page`] port.  Every
//! server call goes through the [`PatientApi`] port.

pub mod api;
pub mod carousel;
pub mod exams;
pub mod menu;
pub mod page;
pub mod register;

pub use api::{ApiError, PatientApi};
pub use carousel::CarouselController;
pub use exams::record_exam;
pub use menu::toggle_menu;
pub use page::{Page, PageError, SubmitEvent};
pub use register::{PendingSubmission, RegistrationSubmitter, SubmissionOutcome};

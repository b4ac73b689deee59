//! Identifiers of the page elements the client relies on.
//!
//! The markup itself lives with the server's templates; these constants are the
//! contract between that markup and the client.

/// The registration form.
pub const REGISTRATION_FORM: &str = "formCadastrarPaciente";

/// Element whose text shows the outcome of a submission.
pub const STATUS_MESSAGE: &str = "mensagem";

/// Input holding the patient's full name.
pub const NAME_INPUT: &str = "nomePaciente";
/// Input holding the patient's birth date.
pub const BIRTH_DATE_INPUT: &str = "dataNascimento";
/// Input holding the patient's sex.
pub const SEX_INPUT: &str = "sexoPaciente";
/// Input holding the patient's CPF (tax id).
pub const TAX_ID_INPUT: &str = "cpfPaciente";
/// Input holding the street of the patient's address.
pub const STREET_INPUT: &str = "ruaPaciente";
/// Input holding the house number of the patient's address.
pub const NUMBER_INPUT: &str = "numeroPaciente";
/// Input holding the city of the patient's address.
pub const CITY_INPUT: &str = "cidadePaciente";
/// Input holding the postal code (CEP) of the patient's address.
pub const POSTAL_CODE_INPUT: &str = "cepPaciente";

/// Every input the registration form is read from, in record order.
pub const REGISTRATION_INPUTS: [&str; 8] = [
    NAME_INPUT,
    BIRTH_DATE_INPUT,
    SEX_INPUT,
    TAX_ID_INPUT,
    STREET_INPUT,
    NUMBER_INPUT,
    CITY_INPUT,
    POSTAL_CODE_INPUT,
];

/// Class carried by every slide of the carousel.
pub const CAROUSEL_ITEM_CLASS: &str = "carousel-item";

/// Class of the strip that is translated to show one slide.
pub const CAROUSEL_INNER_CLASS: &str = "carousel-inner";

/// The one menu toggled through a class rather than an inline style.
pub const OFFCANVAS_MENU: &str = "offcanvasMenu";

/// Class that makes the off-canvas menu visible.
pub const SHOW_CLASS: &str = "show";

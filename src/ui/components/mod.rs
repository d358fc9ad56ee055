pub mod composition_table;
pub mod indicator_badge;
pub mod ratio_slider;
pub mod score_card;
pub mod toast;

pub use composition_table::CompositionTable;
pub use ratio_slider::RatioSlider;
pub use score_card::ScoreCard;
pub use toast::{push_toast, ToastKind, ToastMessage, Toasts};

/// Payment methods offered on the withdrawal screen.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PaymentMethod {
    /// Nothing picked yet.
    #[default]
    None,
    #[strum(serialize = "DANA")]
    Dana,
    #[strum(serialize = "OVO")]
    Ovo,
}

impl PaymentMethod {
    /// Methods a player can actually pick, in display order.
    pub const CHOICES: [PaymentMethod; 2] = [PaymentMethod::Dana, PaymentMethod::Ovo];

    pub fn is_selected(self) -> bool {
        self != PaymentMethod::None
    }
}

/// The screen currently on display. Exactly one is active at a time.
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
#[strum(serialize_all = "snake_case")]
pub enum Screen {
    /// Fruit board with the rewarded-ad button.
    #[default]
    Game,
    /// Cash-out form.
    Withdrawal,
}

use clap::Subcommand;

/// Pin commands.
#[derive(Clone, Debug, Subcommand)]
pub enum PinCommands {
    /// Add a pin together with its first issue.
    Add {
        /// Marker color name (defaults to `general.default_pin_color`)
        #[arg(long)]
        color: Option<String>,
    },
    /// List pins.
    List,
    /// Move a pin's marker.
    Move {
        /// Pin ID or marker label
        pin: String,
        #[arg(allow_negative_numbers = true)]
        x: f64,
        #[arg(allow_negative_numbers = true)]
        y: f64,
    },
}

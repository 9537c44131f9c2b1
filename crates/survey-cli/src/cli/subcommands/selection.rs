use clap::Args;

/// Which pin and issue an issue-scoped command acts on.
///
/// `--pin` accepts a pin ID or its marker label. Without `--issue` the pin's
/// first issue is used. Without `--pin` nothing is selected and mutations do
/// nothing.
#[derive(Clone, Debug, Default, Args)]
pub struct SelectionArgs {
    /// Pin ID or marker label (e.g. `A`)
    #[arg(long)]
    pub pin: Option<String>,
    /// Issue ID
    #[arg(long)]
    pub issue: Option<String>,
}

/// Position of an entry inside a bucket.
#[derive(Clone, Debug, Args)]
pub struct EntryAt {
    /// Bucket: reports, need-approval, inspiration-board
    pub bucket: String,
    /// Note index within the bucket
    pub note: usize,
    /// Entry index within the note
    pub entry: usize,
}

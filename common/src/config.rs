/// Runtime knobs shared across the workspace.
///
/// Every field defaults to the plain interactive invocation: banner shown,
/// full decoration, final keypress pause. The scan window itself is not a
/// knob.
#[derive(Debug, Clone, Copy, Default)]
pub struct Config {
    /// Suppresses the startup banner.
    pub no_banner: bool,

    /// Quiet level; anything above zero drops decorative output.
    pub quiet: u8,

    /// Skips the final "press enter" pause.
    ///
    /// Meant for scripts and test runs where nobody is there to press it.
    pub no_input: bool,
}

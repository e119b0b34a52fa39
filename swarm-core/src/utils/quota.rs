/// Specifies a computational quota for the simulation driver: when it is reached,
/// the driver stops calling `tick` cooperatively, leaving engine state intact.
pub trait Quota {
    /// Returns true when quota is reached.
    fn is_reached(&self) -> bool;
}

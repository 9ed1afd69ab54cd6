/// The precursor ion selected for fragmentation.
///
/// A zero `mz` means the precursor position is unknown.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Precursor {
    /// The selected ion's m/z as reported, may not be the monoisotopic peak.
    pub mz: f64,
    pub intensity: f64,
    /// The reported precursor ion's charge state. May be absent in
    /// some source files.
    pub charge: Option<i32>,
}

impl Precursor {
    pub fn new(mz: f64, intensity: f64, charge: Option<i32>) -> Self {
        Self {
            mz,
            intensity,
            charge,
        }
    }

    /// The charge state when one was reported and it is not zero
    pub fn known_charge(&self) -> Option<i32> {
        self.charge.filter(|z| *z != 0)
    }
}

use std::fmt;
use std::ops::{Deref, DerefMut};

/// A single centroided peak.
///
/// `annotation` holds the text of an optional third column of an MGF peak
/// line when the reader is asked to retain it.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CentroidPeak {
    pub mz: f64,
    pub intensity: f64,
    pub annotation: Option<String>,
}

impl CentroidPeak {
    pub fn new(mz: f64, intensity: f64) -> Self {
        Self {
            mz,
            intensity,
            annotation: None,
        }
    }
}

impl fmt::Display for CentroidPeak {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "CentroidPeak({}, {})", self.mz, self.intensity)
    }
}

impl From<(f64, f64)> for CentroidPeak {
    fn from((mz, intensity): (f64, f64)) -> Self {
        Self::new(mz, intensity)
    }
}

/// An ordered list of peaks. The order is whatever the peaks were added in
/// until [`PeakList::sort_by_position`] is called.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PeakList {
    peaks: Vec<CentroidPeak>,
}

impl PeakList {
    pub fn new(peaks: Vec<CentroidPeak>) -> Self {
        Self { peaks }
    }

    pub fn push(&mut self, peak: CentroidPeak) {
        self.peaks.push(peak)
    }

    /// Sort the peaks by ascending m/z
    pub fn sort_by_position(&mut self) {
        self.peaks.sort_by(|a, b| a.mz.total_cmp(&b.mz))
    }

    pub fn is_sorted_by_position(&self) -> bool {
        self.peaks.windows(2).all(|w| w[0].mz <= w[1].mz)
    }

    pub fn clear(&mut self) {
        self.peaks.clear()
    }

    pub fn into_inner(self) -> Vec<CentroidPeak> {
        self.peaks
    }
}

impl Deref for PeakList {
    type Target = [CentroidPeak];

    fn deref(&self) -> &Self::Target {
        &self.peaks
    }
}

impl DerefMut for PeakList {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.peaks
    }
}

impl From<Vec<CentroidPeak>> for PeakList {
    fn from(peaks: Vec<CentroidPeak>) -> Self {
        Self::new(peaks)
    }
}

impl From<&[CentroidPeak]> for PeakList {
    fn from(peaks: &[CentroidPeak]) -> Self {
        Self::new(peaks.to_vec())
    }
}

impl FromIterator<CentroidPeak> for PeakList {
    fn from_iter<T: IntoIterator<Item = CentroidPeak>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl FromIterator<(f64, f64)> for PeakList {
    fn from_iter<T: IntoIterator<Item = (f64, f64)>>(iter: T) -> Self {
        iter.into_iter().map(CentroidPeak::from).collect()
    }
}

impl IntoIterator for PeakList {
    type Item = CentroidPeak;
    type IntoIter = std::vec::IntoIter<CentroidPeak>;

    fn into_iter(self) -> Self::IntoIter {
        self.peaks.into_iter()
    }
}

impl<'a> IntoIterator for &'a PeakList {
    type Item = &'a CentroidPeak;
    type IntoIter = std::slice::Iter<'a, CentroidPeak>;

    fn into_iter(self) -> Self::IntoIter {
        self.peaks.iter()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_sort_by_position() {
        let mut peaks: PeakList = vec![(300.5, 10.0), (100.25, 5.0), (200.0, 1.0)]
            .into_iter()
            .collect();
        assert!(!peaks.is_sorted_by_position());
        peaks.sort_by_position();
        assert!(peaks.is_sorted_by_position());
        let mzs: Vec<f64> = peaks.iter().map(|p| p.mz).collect();
        assert_eq!(mzs, vec![100.25, 200.0, 300.5]);
        assert_eq!(peaks[0].intensity, 5.0);
    }
}

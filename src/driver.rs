//! Configuration-driven invocation of a modal analysis.
//!
//! The driver turns a [`DriverConfig`] into the three analysis arguments
//! and hands them to a [`ModalAnalysis`] exactly once. It does not touch
//! the filesystem, validate anything, or alter the analysis result:
//! whatever the analysis returns, success or error, is returned as is.

use std::path::PathBuf;

use crate::params::DriverConfig;
use crate::room::RoomDimensions;

/// A modal-analysis routine over an ordered set of recordings
pub trait ModalAnalysis {
    type Output;
    type Error;

    /// Analyse `fnames` up to `max_frequency` Hz for a room of `room_dim` meters
    fn modal_analysis(
        &mut self,
        fnames: &[PathBuf],
        max_frequency: f64,
        room_dim: RoomDimensions,
    ) -> Result<Self::Output, Self::Error>;
}

/// Builds the analysis arguments and issues the call
#[derive(Debug, Clone, Default)]
pub struct Driver {
    config: DriverConfig,
}

impl Driver {
    pub fn new(config: DriverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// Recording paths in analysis order
    pub fn fnames(&self) -> Vec<PathBuf> {
        self.config.fnames()
    }

    /// Run the analysis once with the configured arguments
    pub fn run<A>(&self, analysis: &mut A) -> Result<A::Output, A::Error>
    where
        A: ModalAnalysis + ?Sized,
    {
        let fnames = self.fnames();
        tracing::debug!(
            recordings = fnames.len(),
            max_frequency_hz = self.config.max_frequency_hz,
            room_dim = ?self.config.room_dim.as_array(),
            "Invoking modal analysis"
        );
        analysis.modal_analysis(&fnames, self.config.max_frequency_hz, self.config.room_dim)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::InputSet;

    /// Records every call it receives
    #[derive(Default)]
    struct RecordingStub {
        calls: Vec<(Vec<PathBuf>, f64, RoomDimensions)>,
    }

    impl ModalAnalysis for RecordingStub {
        type Output = usize;
        type Error = String;

        fn modal_analysis(
            &mut self,
            fnames: &[PathBuf],
            max_frequency: f64,
            room_dim: RoomDimensions,
        ) -> Result<usize, String> {
            self.calls.push((fnames.to_vec(), max_frequency, room_dim));
            Ok(self.calls.len())
        }
    }

    #[derive(Debug, PartialEq)]
    enum StubError {
        Missing(String),
    }

    struct FailingStub;

    impl ModalAnalysis for FailingStub {
        type Output = ();
        type Error = StubError;

        fn modal_analysis(
            &mut self,
            fnames: &[PathBuf],
            _max_frequency: f64,
            _room_dim: RoomDimensions,
        ) -> Result<(), StubError> {
            Err(StubError::Missing(fnames[0].display().to_string()))
        }
    }

    #[test]
    fn test_default_run_passes_literals_once() {
        let driver = Driver::default();
        let mut stub = RecordingStub::default();

        let output = driver.run(&mut stub).unwrap();

        assert_eq!(output, 1);
        assert_eq!(stub.calls.len(), 1);

        let (fnames, max_frequency, room_dim) = &stub.calls[0];
        let root = &driver.config().root_dir;
        assert_eq!(
            fnames,
            &vec![
                root.join("omnidirectional.exact_img_src.wav"),
                root.join("omnidirectional.waveguide.wav"),
            ]
        );
        assert_eq!(*max_frequency, 120.0);
        assert_eq!(room_dim.as_array(), [5.56, 3.97, 2.81]);
    }

    #[test]
    fn test_error_propagates_verbatim() {
        let driver = Driver::default();

        let err = driver.run(&mut FailingStub).unwrap_err();

        let expected = driver.fnames()[0].display().to_string();
        assert_eq!(err, StubError::Missing(expected));
    }

    #[test]
    fn test_rerun_is_idempotent() {
        let driver = Driver::new(DriverConfig {
            inputs: vec![InputSet::Omnidirectional, InputSet::NoProcessing],
            ..DriverConfig::default()
        });
        let mut stub = RecordingStub::default();

        driver.run(&mut stub).unwrap();
        driver.run(&mut stub).unwrap();

        assert_eq!(stub.calls.len(), 2);
        assert_eq!(stub.calls[0], stub.calls[1]);
        assert_eq!(stub.calls[0].0.len(), 4);
    }

    #[test]
    fn test_driver_does_not_validate() {
        let driver = Driver::new(DriverConfig {
            inputs: Vec::new(),
            max_frequency_hz: -1.0,
            room_dim: RoomDimensions::new(0.0, 0.0, 0.0),
            ..DriverConfig::default()
        });
        let mut stub = RecordingStub::default();

        driver.run(&mut stub).unwrap();

        let (fnames, max_frequency, _) = &stub.calls[0];
        assert!(fnames.is_empty());
        assert_eq!(*max_frequency, -1.0);
    }

    #[test]
    fn test_runs_through_trait_object() {
        let driver = Driver::default();
        let mut stub = RecordingStub::default();
        let analysis: &mut dyn ModalAnalysis<Output = usize, Error = String> = &mut stub;

        assert_eq!(driver.run(analysis), Ok(1));
    }
}

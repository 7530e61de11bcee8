use bincode::config::{Configuration, Fixint, LittleEndian, NoLimit};
use serde::{Serialize, de::DeserializeOwned};

use super::{BinBytesRecorder, DecodeError, EncodeError, Record};

/// Record any item implementing [Serialize](Serialize) and [DeserializeOwned](DeserializeOwned).
pub trait Recorder: Send + Sync + core::default::Default + core::fmt::Debug + Clone {
    /// Arguments used to record objects.
    type RecordArgs: Clone;

    /// Record output type.
    type RecordOutput;

    /// Arguments used to load recorded objects.
    type LoadArgs;

    /// Records an item.
    ///
    /// # Arguments
    ///
    /// * `record` - The item to record.
    /// * `args` - Arguments used to record the item.
    ///
    /// # Returns
    ///
    /// The output of the recording.
    fn record<R>(
        &self,
        record: R,
        args: Self::RecordArgs,
    ) -> Result<Self::RecordOutput, EncodeError>
    where
        R: Record,
    {
        self.save_item(record.into_item(), args)
    }

    /// Load an item from the given arguments.
    fn load<R>(&self, args: Self::LoadArgs) -> Result<R, DecodeError>
    where
        R: Record,
    {
        let item = self.load_item(args)?;

        Ok(R::from_item(item))
    }

    /// Saves an item.
    ///
    /// This method is used by [record](Recorder::record) to save the item.
    fn save_item<I: Serialize>(
        &self,
        item: I,
        args: Self::RecordArgs,
    ) -> Result<Self::RecordOutput, EncodeError>;

    /// Loads an item.
    ///
    /// This method is used by [load](Recorder::load) to load the item.
    fn load_item<I>(&self, args: Self::LoadArgs) -> Result<I, DecodeError>
    where
        I: DeserializeOwned;
}

/// Bincode configuration shared by every binary recorder.
///
/// Integers use a fixed-width little-endian encoding: type tags are `u32`, lengths and shape
/// dimensions are 8 bytes each.
pub fn bin_config() -> Configuration<LittleEndian, Fixint, NoLimit> {
    bincode::config::standard().with_fixed_int_encoding()
}

/// Default recorder.
///
/// It uses the [bincode](bincode) format, which is the wire format of [encode](super::encode).
pub type DefaultRecorder = BinBytesRecorder;

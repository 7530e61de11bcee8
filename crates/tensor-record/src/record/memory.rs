use core::marker::PhantomData;

use serde::{Serialize, de::DeserializeOwned};

use super::{DecodeError, EncodeError, Recorder, bin_config};

/// Recorder trait specialized to save and load data to and from bytes.
///
/// # Notes
///
/// This is especially useful when records are sent over the network or embedded in other
/// byte-oriented containers.
pub trait BytesRecorder<L: AsRef<[u8]> = Vec<u8>>:
    Recorder<RecordArgs = (), RecordOutput = Vec<u8>, LoadArgs = L>
{
}

/// In memory recorder using the [bincode format](bincode).
#[derive(new, Debug, Default, Clone)]
pub struct BinBytesRecorder<L: AsRef<[u8]> = Vec<u8>> {
    _load_args: PhantomData<L>,
}

impl<L: AsRef<[u8]> + Send + Sync + core::fmt::Debug + Default + Clone> BytesRecorder<L>
    for BinBytesRecorder<L>
{
}

impl<L: AsRef<[u8]> + Send + Sync + core::fmt::Debug + Default + Clone> Recorder
    for BinBytesRecorder<L>
{
    type RecordArgs = ();
    type RecordOutput = Vec<u8>;
    type LoadArgs = L;

    fn save_item<I: Serialize>(
        &self,
        item: I,
        _args: Self::RecordArgs,
    ) -> Result<Self::RecordOutput, EncodeError> {
        Ok(bincode::serde::encode_to_vec(item, bin_config())?)
    }

    fn load_item<I: DeserializeOwned>(&self, args: Self::LoadArgs) -> Result<I, DecodeError> {
        let bytes = args.as_ref();
        let (state, read) = bincode::serde::borrow_decode_from_slice(bytes, bin_config())?;

        if read != bytes.len() {
            return Err(DecodeError::TrailingBytes {
                read,
                len: bytes.len(),
            });
        }

        Ok(state)
    }
}

/// In memory recorder using the [named msgpack](rmp_serde) format.
#[derive(new, Debug, Default, Clone)]
pub struct NamedMpkBytesRecorder<L: AsRef<[u8]> = Vec<u8>> {
    _load_args: PhantomData<L>,
}

impl<L: AsRef<[u8]> + Send + Sync + core::fmt::Debug + Default + Clone> BytesRecorder<L>
    for NamedMpkBytesRecorder<L>
{
}

impl<L: AsRef<[u8]> + Send + Sync + core::fmt::Debug + Default + Clone> Recorder
    for NamedMpkBytesRecorder<L>
{
    type RecordArgs = ();
    type RecordOutput = Vec<u8>;
    type LoadArgs = L;

    fn save_item<I: Serialize>(
        &self,
        item: I,
        _args: Self::RecordArgs,
    ) -> Result<Self::RecordOutput, EncodeError> {
        Ok(rmp_serde::encode::to_vec_named(&item)?)
    }

    fn load_item<I: DeserializeOwned>(&self, args: Self::LoadArgs) -> Result<I, DecodeError> {
        let bytes = args.as_ref();
        let mut reader = bytes;
        let state = rmp_serde::decode::from_read(&mut reader)?;

        if !reader.is_empty() {
            return Err(DecodeError::TrailingBytes {
                read: bytes.len() - reader.len(),
                len: bytes.len(),
            });
        }

        Ok(state)
    }
}

/// In memory recorder using pretty json for easy readability.
#[derive(new, Debug, Default, Clone)]
pub struct PrettyJsonBytesRecorder<L: AsRef<[u8]> = Vec<u8>> {
    _load_args: PhantomData<L>,
}

impl<L: AsRef<[u8]> + Send + Sync + core::fmt::Debug + Default + Clone> BytesRecorder<L>
    for PrettyJsonBytesRecorder<L>
{
}

impl<L: AsRef<[u8]> + Send + Sync + core::fmt::Debug + Default + Clone> Recorder
    for PrettyJsonBytesRecorder<L>
{
    type RecordArgs = ();
    type RecordOutput = Vec<u8>;
    type LoadArgs = L;

    fn save_item<I: Serialize>(
        &self,
        item: I,
        _args: Self::RecordArgs,
    ) -> Result<Self::RecordOutput, EncodeError> {
        Ok(serde_json::to_vec_pretty(&item)?)
    }

    fn load_item<I: DeserializeOwned>(&self, args: Self::LoadArgs) -> Result<I, DecodeError> {
        Ok(serde_json::from_slice(args.as_ref())?)
    }
}

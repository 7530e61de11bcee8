use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::PathBuf;

use serde::{Serialize, de::DeserializeOwned};

use super::{BinBytesRecorder, DecodeError, EncodeError, Recorder, bin_config};

/// Recorder trait specialized to save and load data to and from files.
pub trait FileRecorder:
    Recorder<RecordArgs = PathBuf, RecordOutput = (), LoadArgs = PathBuf>
{
    /// File extension of the format used by the recorder.
    fn file_extension() -> &'static str;
}

/// File recorder using the [bincode format](bincode).
#[derive(new, Debug, Default, Clone)]
pub struct BinFileRecorder;

/// File recorder using the [named msgpack](rmp_serde) format.
#[derive(new, Debug, Default, Clone)]
pub struct NamedMpkFileRecorder;

/// File recorder using pretty json for easy readability.
#[derive(new, Debug, Default, Clone)]
pub struct PrettyJsonFileRecorder;

impl FileRecorder for BinFileRecorder {
    fn file_extension() -> &'static str {
        "bin"
    }
}

impl FileRecorder for NamedMpkFileRecorder {
    fn file_extension() -> &'static str {
        "mpk"
    }
}

impl FileRecorder for PrettyJsonFileRecorder {
    fn file_extension() -> &'static str {
        "json"
    }
}

macro_rules! str2reader {
    (
        $file:expr
    ) => {{
        $file.set_extension(<Self as FileRecorder>::file_extension());
        let path = $file.as_path();
        log::debug!("Loading record from {}", path.display());

        File::open(path)
            .map_err(|err| match err.kind() {
                std::io::ErrorKind::NotFound => DecodeError::FileNotFound(err.to_string()),
                _ => DecodeError::Io(err),
            })
            .map(BufReader::new)
    }};
}

macro_rules! str2writer {
    (
        $file:expr
    ) => {{
        $file.set_extension(<Self as FileRecorder>::file_extension());
        let path = $file.as_path();

        if path.exists() {
            log::info!("File exists, replacing");
            std::fs::remove_file(path)?;
        }

        log::debug!("Saving record to {}", path.display());
        File::create(path).map(BufWriter::new)
    }};
}

impl Recorder for BinFileRecorder {
    type RecordArgs = PathBuf;
    type RecordOutput = ();
    type LoadArgs = PathBuf;

    fn save_item<I: Serialize>(
        &self,
        item: I,
        mut file: Self::RecordArgs,
    ) -> Result<(), EncodeError> {
        let mut writer = str2writer!(file)?;
        bincode::serde::encode_into_std_write(&item, &mut writer, bin_config())?;
        writer.flush()?;

        Ok(())
    }

    fn load_item<I: DeserializeOwned>(&self, mut file: Self::LoadArgs) -> Result<I, DecodeError> {
        let mut reader = str2reader!(file)?;
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;

        BinBytesRecorder::<Vec<u8>>::new().load_item(bytes)
    }
}

impl Recorder for NamedMpkFileRecorder {
    type RecordArgs = PathBuf;
    type RecordOutput = ();
    type LoadArgs = PathBuf;

    fn save_item<I: Serialize>(
        &self,
        item: I,
        mut file: Self::RecordArgs,
    ) -> Result<(), EncodeError> {
        let mut writer = str2writer!(file)?;
        rmp_serde::encode::write_named(&mut writer, &item)?;
        writer.flush()?;

        Ok(())
    }

    fn load_item<I: DeserializeOwned>(&self, mut file: Self::LoadArgs) -> Result<I, DecodeError> {
        let reader = str2reader!(file)?;
        let state = rmp_serde::decode::from_read(reader)?;

        Ok(state)
    }
}

impl Recorder for PrettyJsonFileRecorder {
    type RecordArgs = PathBuf;
    type RecordOutput = ();
    type LoadArgs = PathBuf;

    fn save_item<I: Serialize>(
        &self,
        item: I,
        mut file: Self::RecordArgs,
    ) -> Result<(), EncodeError> {
        let mut writer = str2writer!(file)?;
        serde_json::to_writer_pretty(&mut writer, &item)?;
        writer.flush()?;

        Ok(())
    }

    fn load_item<I: DeserializeOwned>(&self, mut file: Self::LoadArgs) -> Result<I, DecodeError> {
        let reader = str2reader!(file)?;
        let state = serde_json::from_reader(reader)?;

        Ok(state)
    }
}

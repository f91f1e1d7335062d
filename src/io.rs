//! Safetensors I/O for comparison vectors.
//!
//! Writer: [`StWriter`] dumps named F64 / I64 tensors for diffing against
//! MATLAB or Python output. Reader: [`load_f64_tensors`] reads them back.
use anyhow::{bail, Context, Result};
use ndarray::{Array1, Array2, ArrayD, IxDyn};
use std::collections::HashMap;
use std::path::Path;

// ── Low-level safetensors format (raw bytes ↔ ndarray, no `safetensors`
//    crate). ────────────────────────────────────────────────────────────────

/// Size of the little-endian `u64` header-length prefix.
const LEN_PREFIX: usize = 8;

/// The JSON header is space-padded to a multiple of this.
const HEADER_ALIGN: usize = 8;

type Header = serde_json::Map<String, serde_json::Value>;

/// Returns the header and the absolute offset where tensor data starts.
fn parse_header(bytes: &[u8]) -> Result<(Header, usize)> {
    let prefix: [u8; LEN_PREFIX] = bytes
        .get(..LEN_PREFIX)
        .context("safetensors file too small")?
        .try_into()?;
    let n = usize::try_from(u64::from_le_bytes(prefix))
        .context("safetensors header length does not fit in memory")?;
    let data_start = LEN_PREFIX
        .checked_add(n)
        .context("safetensors header length overflows")?;
    let raw = bytes.get(LEN_PREFIX..data_start).with_context(|| {
        format!("safetensors header length {n} exceeds file size {}", bytes.len())
    })?;
    let header: Header =
        serde_json::from_slice(raw).context("failed to parse safetensors header")?;
    Ok((header, data_start))
}

/// Absolute byte range of one tensor, validated against overflow.
fn byte_range(entry: &serde_json::Value, data_start: usize) -> Result<std::ops::Range<usize>> {
    let offsets = entry["data_offsets"]
        .as_array()
        .context("missing 'data_offsets'")?;
    let offset = |i: usize, what: &str| -> Result<usize> {
        let rel = offsets
            .get(i)
            .and_then(|v| v.as_u64())
            .with_context(|| format!("bad {what} offset"))?;
        usize::try_from(rel)
            .ok()
            .and_then(|rel| data_start.checked_add(rel))
            .with_context(|| format!("{what} offset {rel} overflows"))
    };
    let (s, e) = (offset(0, "start")?, offset(1, "end")?);
    if s > e {
        bail!("start offset past end offset");
    }
    Ok(s..e)
}

fn shape_of(entry: &serde_json::Value) -> Result<Vec<usize>> {
    entry["shape"]
        .as_array()
        .context("missing 'shape'")?
        .iter()
        .map(|v| v.as_u64().map(|d| d as usize).context("bad shape entry"))
        .collect()
}

/// Load every F64 and I64 tensor of a safetensors file as `f64`.
///
/// Other dtypes are skipped.
pub fn load_f64_tensors(path: &Path) -> Result<HashMap<String, ArrayD<f64>>> {
    let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let (header, data_start) = parse_header(&bytes)?;

    let mut out = HashMap::new();
    for (key, entry) in &header {
        if key == "__metadata__" {
            continue;
        }
        let dtype = entry["dtype"].as_str().context("missing 'dtype'")?;
        let raw = bytes
            .get(byte_range(entry, data_start)?)
            .with_context(|| format!("tensor '{key}' runs past end of file"))?;

        let vals: Vec<f64> = match dtype {
            "F64" => raw
                .chunks_exact(8)
                .map(|b| f64::from_le_bytes([b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7]]))
                .collect(),
            "I64" => raw
                .chunks_exact(8)
                .map(|b| i64::from_le_bytes([b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7]]) as f64)
                .collect(),
            _ => continue,
        };
        let arr = ArrayD::from_shape_vec(IxDyn(&shape_of(entry)?), vals)
            .with_context(|| format!("tensor '{key}' has inconsistent shape"))?;
        out.insert(key.clone(), arr);
    }
    Ok(out)
}

// ── Writer ───────────────────────────────────────────────────────────────────

/// Serialise `header` and pad it with spaces to [`HEADER_ALIGN`].
fn encode_header(header: &Header) -> Result<Vec<u8>> {
    let mut bytes = serde_json::to_vec(header)?;
    let padded_len = bytes.len().next_multiple_of(HEADER_ALIGN);
    bytes.resize(padded_len, b' ');
    Ok(bytes)
}

/// One named tensor queued for writing.
#[derive(Debug)]
struct Tensor {
    name: String,
    dtype: &'static str,
    shape: Vec<usize>,
    bytes: Vec<u8>,
}

/// Simple safetensors file writer for F64 and I64 tensors.
///
/// Usage:
/// ```rust,no_run
/// use prep_numerics::io::StWriter;
/// use std::path::Path;
/// let mut w = StWriter::new();
/// w.add_f64("iqr", &[0.4776, 0.5144, 0.4851], &[3]);
/// w.add_i64("picks", &[6, 47, 55], &[3]);
/// w.write(Path::new("/tmp/out.safetensors")).unwrap();
/// ```
#[derive(Debug, Default)]
pub struct StWriter {
    tensors: Vec<Tensor>,
}

impl StWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_f64(&mut self, name: &str, data: &[f64], shape: &[usize]) {
        let bytes = data.iter().flat_map(|v| v.to_le_bytes()).collect();
        self.push(name, "F64", shape, bytes);
    }

    pub fn add_f64_arr1(&mut self, name: &str, arr: &Array1<f64>) {
        let data: Vec<f64> = arr.iter().copied().collect();
        self.add_f64(name, &data, &[arr.len()]);
    }

    /// Row-major, like numpy's default layout.
    pub fn add_f64_arr2(&mut self, name: &str, arr: &Array2<f64>) {
        let data: Vec<f64> = arr.iter().copied().collect();
        self.add_f64(name, &data, &[arr.nrows(), arr.ncols()]);
    }

    pub fn add_i64(&mut self, name: &str, data: &[i64], shape: &[usize]) {
        let bytes = data.iter().flat_map(|v| v.to_le_bytes()).collect();
        self.push(name, "I64", shape, bytes);
    }

    fn push(&mut self, name: &str, dtype: &'static str, shape: &[usize], bytes: Vec<u8>) {
        self.tensors.push(Tensor { name: name.to_string(), dtype, shape: shape.to_vec(), bytes });
    }

    pub fn len(&self) -> usize {
        self.tensors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tensors.is_empty()
    }

    /// Header plus concatenated tensor data, as written by [`StWriter::write`].
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut header = Header::new();
        let mut offset = 0;
        for t in &self.tensors {
            let end = offset + t.bytes.len();
            header.insert(t.name.clone(), serde_json::json!({
                "dtype": t.dtype,
                "shape": t.shape,
                "data_offsets": [offset, end],
            }));
            offset = end;
        }
        let header = encode_header(&header)?;

        let mut out = Vec::with_capacity(LEN_PREFIX + header.len() + offset);
        out.extend_from_slice(&(header.len() as u64).to_le_bytes());
        out.extend_from_slice(&header);
        for t in &self.tensors {
            out.extend_from_slice(&t.bytes);
        }
        Ok(out)
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        let bytes = self.to_bytes()?;
        std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
        log::debug!("wrote {} tensors to {}", self.tensors.len(), path.display());
        Ok(())
    }
}

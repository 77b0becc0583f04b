use crate::{
    encode::LINE_END,
    error::{OpenError, TraceError},
    recorder::Protocol,
};
use educe::Educe;
use log::{debug, warn};
use std::{
    fs::File,
    io::{BufWriter, Write},
};

/// Option for TraceDocument
#[derive(Debug, Clone, Educe)]
#[educe(Default)]
pub struct TraceOptions {
    /// Max chars of color space names, longer names are truncated.
    #[educe(Default = 16)]
    colorspace_name_len: usize,
    /// Max chars of font names, longer names are truncated.
    #[educe(Default = 32)]
    font_name_len: usize,
    /// Report unmatched end and char records outside of text runs as error,
    /// instead of logging a warning.
    strict: bool,
}

impl TraceOptions {
    pub fn colorspace_name_len(&self) -> usize {
        self.colorspace_name_len
    }

    pub fn font_name_len(&self) -> usize {
        self.font_name_len
    }

    pub fn strict(&self) -> bool {
        self.strict
    }
}

#[derive(Educe)]
#[educe(Default(new))]
pub struct TraceOptionsBuilder(TraceOptions);

impl TraceOptionsBuilder {
    pub fn colorspace_name_len(mut self, len: usize) -> Self {
        self.0.colorspace_name_len = len;
        self
    }

    pub fn font_name_len(mut self, len: usize) -> Self {
        self.0.font_name_len = len;
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.0.strict = strict;
        self
    }

    pub fn build(self) -> TraceOptions {
        self.0
    }
}

/// Trace of one page.
///
/// Created by `open()`, which writes the xml preamble and page start tag,
/// event hooks append to the output in call order, `close()` writes the page end tag.
/// A document dropped without `close()` leaves a partial trace.
pub struct TraceDocument<W: Write = BufWriter<File>> {
    out: W,
    page_number: u32,
    options: TraceOptions,
    pub(crate) protocol: Protocol,
}

impl TraceDocument<BufWriter<File>> {
    /// Create or truncate trace file at `path`.
    pub fn open(page_number: u32, path: impl AsRef<std::path::Path>) -> Result<Self, OpenError> {
        Self::open_with_options(page_number, path, TraceOptions::default())
    }

    pub fn open_with_options(
        page_number: u32,
        path: impl AsRef<std::path::Path>,
        options: TraceOptions,
    ) -> Result<Self, OpenError> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| OpenError::Create {
            path: path.to_owned(),
            source,
        })?;
        debug!("trace page {page_number} to {}", path.display());
        Self::with_writer(page_number, BufWriter::new(file), options)
    }
}

impl<W: Write> TraceDocument<W> {
    pub fn with_writer(
        page_number: u32,
        mut out: W,
        options: TraceOptions,
    ) -> Result<Self, OpenError> {
        write!(out, "<?xml version=\"1.0\" encoding=\"UTF-8\" ?>{LINE_END}")?;
        write!(out, "<page page_number=\"{page_number}\">{LINE_END}")?;
        Ok(Self {
            out,
            page_number,
            options,
            protocol: Protocol::default(),
        })
    }

    pub fn page_number(&self) -> u32 {
        self.page_number
    }

    pub fn options(&self) -> &TraceOptions {
        &self.options
    }

    pub(crate) fn out(&mut self) -> &mut W {
        &mut self.out
    }

    /// Write page end tag, flush and return the underlying writer.
    pub fn close(mut self) -> Result<W, TraceError> {
        if !self.protocol.is_idle() {
            warn!(
                "close trace of page {} with events not ended: {}",
                self.page_number,
                self.protocol.pending()
            );
        }
        write!(self.out, "</page>{LINE_END}")?;
        self.out.flush()?;
        debug!("trace of page {} closed", self.page_number);
        Ok(self.out)
    }
}

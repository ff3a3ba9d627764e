//! Result export formats. CSV is the only format the upload surface
//! consumes today.

pub mod csv;

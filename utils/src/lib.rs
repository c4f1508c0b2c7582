use std::path::Path;
use std::fs::File;
use std::io::{self, Write, Read};

/// n evenly spaced samples from start to stop, both ends included
pub fn linspace(start:f64,stop:f64,n:usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start)/((n - 1) as f64);
            (0..n).map(|i| start + step*(i as f64)).collect()
        }
    }
}

pub fn read_to_string(filepath:&Path,extension:&str) -> io::Result<String> {
    let p = filepath.with_extension(extension);
    let mut f = File::open(&p)?;
    let mut s = String::new();
    f.read_to_string(&mut s)?;
    Ok(s)
}

pub fn write_to_file(filepath:&Path,extension:&str,string:&str) -> io::Result<()> {
    let p = filepath.with_extension(extension);
    let mut f = File::create(p)?;
    f.write_all(string.as_bytes())
}

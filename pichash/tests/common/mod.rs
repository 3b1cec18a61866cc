// NOTE: every test will complain about the functions it doesn't use
#![allow(unused)]

use std::{
    io::{BufRead, BufReader, Cursor, Write},
    net::TcpListener,
    path::{Path, PathBuf},
};

use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use tempfile::TempPath;

/// Returns cargo's tmpdir
pub fn cargo_tmpdir() -> PathBuf {
    PathBuf::from(option_env!("CARGO_TARGET_TMPDIR").expect("no cargo tmpdir???"))
}

/// Writes the image to a temporary file inside cargo's tmpdir, encoded as `format` no
/// matter what `suffix` says.
pub fn tmp_image(img: &RgbImage, format: ImageFormat, suffix: &str) -> TempPath {
    let path = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile_in(cargo_tmpdir())
        .expect("could not create temporary file")
        .into_temp_path();
    img.save_with_format(&path, format)
        .expect("could not write the image");
    path
}

pub fn tmp_png(img: &RgbImage) -> TempPath {
    tmp_image(img, ImageFormat::Png, ".png")
}

/// Writes arbitrary bytes to a temporary file
pub fn tmp_bytes(bytes: &[u8]) -> TempPath {
    let path = tempfile::Builder::new()
        .tempfile_in(cargo_tmpdir())
        .expect("could not create temporary file")
        .into_temp_path();
    std::fs::write(&path, bytes).expect("could not write the file");
    path
}

/// A smooth diagonal gradient, something with a bit of structure to hash
pub fn gradient(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        let v = ((x + y) * 255 / (width + height).max(1)) as u8;
        Rgb([v, v / 2, 255 - v])
    })
}

pub fn path_str(path: &Path) -> &str {
    path.to_str().expect("temporary paths are utf-8")
}

pub fn png_bytes(img: &RgbImage) -> Vec<u8> {
    let mut bytes = Vec::new();
    DynamicImage::ImageRgb8(img.clone())
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .expect("could not encode the image");
    bytes
}

/// Answers exactly one http request on localhost with `status` and `body`, returns the
/// url to request
pub fn serve_once(status: &str, body: Vec<u8>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("could not bind");
    let addr = listener.local_addr().expect("no local address");
    let status = status.to_string();

    std::thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("no connection");
        let mut reader = BufReader::new(stream.try_clone().expect("could not clone"));
        let mut line = String::new();
        loop {
            line.clear();
            let read = reader.read_line(&mut line).expect("could not read request");
            if read == 0 || line == "\r\n" {
                break;
            }
        }

        write!(
            stream,
            "HTTP/1.1 {status}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            body.len()
        )
        .expect("could not write headers");
        stream.write_all(&body).expect("could not write body");
    });

    format!("http://{addr}/image.png")
}

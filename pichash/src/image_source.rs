use std::{
    convert::Infallible,
    fmt,
    fs::File,
    io::{self, BufRead, BufReader, Cursor, Read, Seek},
    path::{Path, PathBuf},
    str::FromStr,
};

use image::{
    io::Reader as ImageReader, DynamicImage, GenericImageView, ImageError, ImageFormat,
};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
#[error("Error when loading '{context}', apparently: {kind}")]
pub struct Error {
    context: String,
    kind: ErrorKind,
}

#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    #[error("the file does not exist")]
    NotFound,
    #[error("io: {0}")]
    Io(#[from] io::Error),
    #[error("http: {0}")]
    Http(#[from] Box<ureq::Error>),
    #[error("image: {0}")]
    Image(#[from] ImageError),
}

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

trait ErrContext<T> {
    fn context<S: ToString, F: FnOnce() -> S>(self, provider: F) -> Result<T>;
}

impl<T, E> ErrContext<T> for std::result::Result<T, E>
where
    E: Into<ErrorKind>,
{
    fn context<S: ToString, F: FnOnce() -> S>(self, provider: F) -> Result<T> {
        self.map_err(|e| Error {
            context: provider().to_string(),
            kind: e.into(),
        })
    }
}

/// Where to read an image from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    Url(String),
    Path(PathBuf),
}

impl ImageSource {
    pub fn parse(source: &str) -> Self {
        if source.starts_with("http://") || source.starts_with("https://") {
            ImageSource::Url(source.to_string())
        } else {
            ImageSource::Path(PathBuf::from(source))
        }
    }

    /// Reads and decodes the image, guessing the format from its content. Makes exactly
    /// one attempt.
    pub fn load(&self) -> Result<DynamicImage> {
        log::debug!("Loading {self}");
        match self {
            ImageSource::Url(url) => load_url(url),
            ImageSource::Path(path) => load_path(path),
        }
    }
}

impl FromStr for ImageSource {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for ImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageSource::Url(url) => write!(f, "{url}"),
            ImageSource::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

fn load_path(path: &Path) -> Result<DynamicImage> {
    let ctx = || path.display();
    if !path.try_exists().context(ctx)? {
        return Err(ErrorKind::NotFound).context(ctx);
    }

    let file = File::open(path).context(ctx)?;
    decode(ImageReader::new(BufReader::new(file)), ctx)
}

fn load_url(url: &str) -> Result<DynamicImage> {
    let ctx = || url;
    let response = ureq::get(url).call().map_err(Box::new).context(ctx)?;
    log::debug!("{url} responded with status {}", response.status());

    let mut bytes = Vec::new();
    response
        .into_reader()
        .read_to_end(&mut bytes)
        .context(ctx)?;
    decode(ImageReader::new(Cursor::new(bytes)), ctx)
}

fn decode<R, S, F>(reader: ImageReader<R>, ctx: F) -> Result<DynamicImage>
where
    R: BufRead + Seek,
    S: ToString,
    F: Copy + FnOnce() -> S,
{
    let reader = reader.with_guessed_format().context(ctx)?;
    let format = reader.format();

    match reader.decode() {
        Ok(img) => {
            let (width, height) = img.dimensions();
            log::debug!(
                "Decoded {} as {} ({width}x{height})",
                ctx().to_string(),
                format_name(format),
            );
            Ok(img)
        }
        Err(e) => {
            log::error!(
                "file: {} format: {} error: {e}",
                ctx().to_string(),
                format_name(format)
            );
            Err(e).context(ctx)
        }
    }
}

fn format_name(format: Option<ImageFormat>) -> String {
    format
        .map(|f| format!("{f:?}"))
        .unwrap_or_else(|| "unknown".to_string())
}

use std::io;

/// Something that can show a reading's lookup link to the user
pub(crate) trait LinkOpener {
    fn open(&mut self, url: &str) -> io::Result<()>;
}

/// Opens links in the system's default web browser
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct WebBrowser;

impl LinkOpener for WebBrowser {
    fn open(&mut self, url: &str) -> io::Result<()> {
        log::info!("opening {url} in web browser");
        webbrowser::open(url)
    }
}

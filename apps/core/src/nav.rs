/// One entry of the site navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavPage {
    pub url: String,
    pub title: String,
}

impl NavPage {
    pub fn new(url: &str, title: &str) -> Self {
        Self {
            url: url.to_string(),
            title: title.to_string(),
        }
    }
}

pub fn default_pages(github_user: &str) -> Vec<NavPage> {
    vec![
        NavPage::new("", "Home"),
        NavPage::new("projects/", "Projects"),
        NavPage::new("contact/", "Contact"),
        NavPage::new("resume/", "Resume"),
        NavPage::new(&format!("https://github.com/{github_user}"), "GitHub"),
    ]
}

/// The parts of the page location links are resolved against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub host: String,
    pub hostname: String,
    pub pathname: String,
}

impl Location {
    pub fn new(host: &str, pathname: &str) -> Self {
        let hostname = host.split(':').next().unwrap_or(host);
        Self {
            host: host.to_string(),
            hostname: hostname.to_string(),
            pathname: pathname.to_string(),
        }
    }

    pub fn base_path(&self) -> &'static str {
        base_path(&self.hostname)
    }
}

/// The site is served from the root locally and under `/portfolio/` once
/// deployed.
pub fn base_path(hostname: &str) -> &'static str {
    if hostname == "localhost" || hostname == "127.0.0.1" {
        "/"
    } else {
        "/portfolio/"
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub title: String,
    pub href: String,
    pub current: bool,
    pub external: bool,
}

pub fn nav_links(pages: &[NavPage], location: &Location) -> Vec<NavLink> {
    let base = location.base_path();
    pages
        .iter()
        .map(|page| {
            let href = if page.url.starts_with("http") {
                page.url.clone()
            } else {
                format!("{base}{}", page.url)
            };
            let (host, path) = split_href(&href, &location.host);
            NavLink {
                title: page.title.clone(),
                current: host == location.host && path == location.pathname,
                external: host != location.host,
                href,
            }
        })
        .collect()
}

/// Host and path of an href. Relative hrefs take the current host.
fn split_href<'a>(href: &'a str, current_host: &'a str) -> (&'a str, &'a str) {
    let Some((_, rest)) = href.split_once("://") else {
        return (current_host, href);
    };
    match rest.find(['/', '?', '#']) {
        Some(end) if rest[end..].starts_with('/') => (&rest[..end], &rest[end..]),
        Some(end) => (&rest[..end], "/"),
        None => (rest, "/"),
    }
}

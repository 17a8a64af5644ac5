use crate::Error;
use url::Url;

/// Parse the panel base URL, rejecting query/fragment and stripping a single
/// trailing slash so that joining with the API prefix is unambiguous.
pub(crate) fn normalize_base_url(raw: &str) -> Result<Url, Error> {
    let mut url = Url::parse(raw).map_err(|err| Error::InvalidConfig {
        message: "invalid base_url".into(),
        source: Some(Box::new(err)),
    })?;

    if url.query().is_some() || url.fragment().is_some() {
        return Err(Error::InvalidConfig {
            message: "base_url must not include query or fragment".into(),
            source: None,
        });
    }

    let path = url.path();
    if path.len() > 1 && path.ends_with('/') {
        let trimmed = path.trim_end_matches('/').to_owned();
        url.set_path(&trimmed);
    }
    Ok(url)
}

/// Build `<base>/api/application/<segments...>` with percent-encoded segments.
pub(crate) fn endpoint_url<'a, I>(base_url: &Url, segments: I) -> Result<Url, Error>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut url = base_url.clone();
    {
        let mut path = url.path_segments_mut().map_err(|_| Error::InvalidConfig {
            message: "base_url must be a hierarchical URL".into(),
            source: None,
        })?;
        path.pop_if_empty();
        path.push("api");
        path.push("application");
        for seg in segments {
            path.push(seg);
        }
    }
    Ok(url)
}

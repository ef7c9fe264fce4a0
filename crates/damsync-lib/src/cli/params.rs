use crate::config::Config;
use crate::download::MirrorOptions;

#[derive(Debug, Clone)]
pub struct ServeParams {
    pub config: Config,
}

#[derive(Debug, Clone)]
pub struct MirrorParams {
    pub manifest_url: String,
    pub options: MirrorOptions,
}

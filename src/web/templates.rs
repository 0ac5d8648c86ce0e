// Askama templates
//
// One struct per page template. Each takes the shared layout plus the page
// body; `From<Page<T>>` moves a built page into its template.

use askama::Template;

use crate::pages::*;

// ============================================================================
// Pages with the site layout
// ============================================================================

#[derive(Template)]
#[template(path = "pages/home.html")]
pub struct HomeTemplate {
    pub layout: LayoutView,
    pub page: HomeView,
}

impl From<Page<HomeView>> for HomeTemplate {
    fn from(p: Page<HomeView>) -> Self {
        Self { layout: p.layout, page: p.body }
    }
}

#[derive(Template)]
#[template(path = "pages/about.html")]
pub struct AboutTemplate {
    pub layout: LayoutView,
    pub page: AboutView,
}

impl From<Page<AboutView>> for AboutTemplate {
    fn from(p: Page<AboutView>) -> Self {
        Self { layout: p.layout, page: p.body }
    }
}

#[derive(Template)]
#[template(path = "pages/sectors.html")]
pub struct SectorIndexTemplate {
    pub layout: LayoutView,
    pub page: SectorIndexView,
}

impl From<Page<SectorIndexView>> for SectorIndexTemplate {
    fn from(p: Page<SectorIndexView>) -> Self {
        Self { layout: p.layout, page: p.body }
    }
}

#[derive(Template)]
#[template(path = "pages/sector.html")]
pub struct SectorTemplate {
    pub layout: LayoutView,
    pub page: SectorDetailView,
}

impl From<Page<SectorDetailView>> for SectorTemplate {
    fn from(p: Page<SectorDetailView>) -> Self {
        Self { layout: p.layout, page: p.body }
    }
}

#[derive(Template)]
#[template(path = "pages/capabilities.html")]
pub struct CapabilityIndexTemplate {
    pub layout: LayoutView,
    pub page: CapabilityIndexView,
}

impl From<Page<CapabilityIndexView>> for CapabilityIndexTemplate {
    fn from(p: Page<CapabilityIndexView>) -> Self {
        Self { layout: p.layout, page: p.body }
    }
}

#[derive(Template)]
#[template(path = "pages/capability.html")]
pub struct CapabilityTemplate {
    pub layout: LayoutView,
    pub page: CapabilityDetailView,
}

impl From<Page<CapabilityDetailView>> for CapabilityTemplate {
    fn from(p: Page<CapabilityDetailView>) -> Self {
        Self { layout: p.layout, page: p.body }
    }
}

#[derive(Template)]
#[template(path = "pages/contact.html")]
pub struct ContactTemplate {
    pub layout: LayoutView,
    pub page: ContactView,
}

impl From<Page<ContactView>> for ContactTemplate {
    fn from(p: Page<ContactView>) -> Self {
        Self { layout: p.layout, page: p.body }
    }
}

#[derive(Template)]
#[template(path = "pages/insights.html")]
pub struct InsightsTemplate {
    pub layout: LayoutView,
    pub page: InsightsView,
}

impl From<Page<InsightsView>> for InsightsTemplate {
    fn from(p: Page<InsightsView>) -> Self {
        Self { layout: p.layout, page: p.body }
    }
}

#[derive(Template)]
#[template(path = "pages/not_found.html")]
pub struct NotFoundTemplate {
    pub layout: LayoutView,
    pub page: NotFoundView,
}

impl From<Page<NotFoundView>> for NotFoundTemplate {
    fn from(p: Page<NotFoundView>) -> Self {
        Self { layout: p.layout, page: p.body }
    }
}

#[derive(Template)]
#[template(path = "pages/error.html")]
pub struct ErrorTemplate {
    pub layout: LayoutView,
    pub page: ErrorView,
}

impl From<Page<ErrorView>> for ErrorTemplate {
    fn from(p: Page<ErrorView>) -> Self {
        Self { layout: p.layout, page: p.body }
    }
}

// ============================================================================
// No layout
// ============================================================================

#[derive(Template)]
#[template(path = "standalone.html")]
pub struct StandaloneTemplate {
    pub page: StandaloneView,
}

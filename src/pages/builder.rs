//! Page Composition
//!
//! `PageBuilder` turns catalog records plus resolved messages into view
//! models. It can only be created from a `Locale`, so by the time any lookup
//! happens the URL segment has already been validated.
//!
//! Metadata: the default locale uses each record's catalog metadata; other
//! locales use the translated title with the site suffix. Keywords always
//! come from the catalog.

use chrono::{Datelike, NaiveDate, Utc};

use super::view_models::*;
use crate::catalog::{
    Capability, Catalog, Insight, NavChildren, NavLink, PageMetadata, Sector, COMPANY_LINKS, INQUIRY_TYPES,
    LEGAL_LINKS, MAIN_NAV, OVERVIEW_POINTS_PER_COLUMN, RISK_ITEMS_PER_GROUP, SITE_METADATA,
};
use crate::error::Result;
use crate::i18n::keys::{ABOUT_PILLARS, ABOUT_VALUES, MISSION_PARAGRAPHS, MONTHS};
use crate::i18n::{switch_locale_path, Locale, Namespace, Scope, Translator};

/// Title, description and keywords for one page
#[derive(Debug, Clone, Default)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub keywords: String,
}

pub struct PageBuilder<'a> {
    catalog: &'a Catalog,
    translator: &'a Translator,
    locale: Locale,
}

impl<'a> PageBuilder<'a> {
    pub fn new(catalog: &'a Catalog, translator: &'a Translator, locale: Locale) -> Self {
        Self {
            catalog,
            translator,
            locale,
        }
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    fn t(&self, path: &str) -> Result<&'a str> {
        self.translator.resolve(self.locale, path)
    }

    fn s(&self, path: &str) -> Result<String> {
        self.t(path).map(str::to_string)
    }

    fn ns(&self, namespace: Namespace) -> Scope<'a> {
        self.translator.scope(self.locale, namespace)
    }

    fn sector_scope(&self, sector: &Sector) -> Scope<'a> {
        self.translator.scope(self.locale, format!("sectors.{}", sector.i18n_key))
    }

    fn capability_scope(&self, capability: &Capability) -> Scope<'a> {
        self.translator
            .scope(self.locale, format!("capabilities.{}", capability.i18n_key))
    }

    /// Locale-prefixed site path
    fn href(&self, suffix: &str) -> String {
        format!("/{}{}", self.locale, suffix)
    }

    fn titled(&self, title: &str) -> Result<String> {
        Ok(format!("{} | {}", title, self.t("meta.titleSuffix")?))
    }

    fn record_meta(&self, metadata: &PageMetadata, title: String, description: String) -> PageMeta {
        let keywords = metadata.keywords.join(", ");
        if self.locale.is_default() {
            PageMeta {
                title: metadata.title.to_string(),
                description: metadata.description.to_string(),
                keywords,
            }
        } else {
            PageMeta {
                title,
                description,
                keywords,
            }
        }
    }

    fn contact_button(&self, label: &str) -> LinkView {
        LinkView::new(label, self.href("/contact"))
    }

    fn home_cta(&self) -> Result<CtaView> {
        let home = self.ns(Namespace::Home);
        Ok(CtaView {
            title: home.s("cta.title")?,
            description: home.s("cta.description")?,
            button: self.contact_button(home.t("cta.button")?),
        })
    }

    fn sector_card(&self, sector: &Sector) -> Result<SectorCard> {
        let scope = self.sector_scope(sector);
        Ok(SectorCard {
            slug: sector.slug.to_string(),
            href: self.href(&format!("/sectors/{}", sector.slug)),
            icon: sector.icon.as_str().to_string(),
            title: scope.s("title")?,
            short_title: scope.s("shortTitle")?,
            description: scope.s("description")?,
        })
    }

    fn capability_card(&self, capability: &Capability) -> Result<CapabilityCard> {
        let scope = self.capability_scope(capability);
        Ok(CapabilityCard {
            slug: capability.slug.to_string(),
            href: self.href(&format!("/capabilities/{}", capability.slug)),
            name: scope.s("name")?,
            tagline: scope.s("tagline")?,
            description: scope.s("description")?,
        })
    }

    fn cards_from_list(&self, scope: &Scope<'a>, key: &str, count: usize) -> Vec<CardView> {
        let titles = scope.list_field(key, count, "title");
        let descriptions = scope.list_field(key, count, "description");
        titles
            .into_iter()
            .zip(descriptions)
            .enumerate()
            .map(|(i, (title, description))| CardView {
                id: i.to_string(),
                icon: String::new(),
                title,
                description,
            })
            .collect()
    }

    // ========================================================================
    // Layout
    // ========================================================================

    fn nav_item(&self, link: &NavLink, suffix: &str) -> Result<NavItemView> {
        let active = if link.path.is_empty() {
            suffix.is_empty()
        } else {
            suffix == link.path || suffix.starts_with(&format!("{}/", link.path))
        };

        let children = match link.children {
            NavChildren::None => Vec::new(),
            NavChildren::Sectors => self
                .catalog
                .all_sectors()
                .iter()
                .map(|sector| {
                    let scope = self.sector_scope(sector);
                    Ok(NavChildView {
                        label: scope.s("title")?,
                        href: self.href(&format!("/sectors/{}", sector.slug)),
                        description: scope.s("description")?,
                    })
                })
                .collect::<Result<Vec<_>>>()?,
            NavChildren::Capabilities => self
                .catalog
                .all_capabilities()
                .iter()
                .map(|capability| {
                    let scope = self.capability_scope(capability);
                    Ok(NavChildView {
                        label: scope.s("name")?,
                        href: self.href(&format!("/capabilities/{}", capability.slug)),
                        description: scope.s("tagline")?,
                    })
                })
                .collect::<Result<Vec<_>>>()?,
        };

        Ok(NavItemView {
            label: self.s(link.label_key)?,
            href: self.href(link.path),
            active,
            children,
        })
    }

    fn footer(&self) -> Result<FooterView> {
        let footer = self.ns(Namespace::Footer);

        let sector_links = self
            .catalog
            .all_sectors()
            .iter()
            .map(|sector| {
                Ok(LinkView::new(
                    self.sector_scope(sector).t("title")?,
                    self.href(&format!("/sectors/{}", sector.slug)),
                ))
            })
            .collect::<Result<Vec<_>>>()?;

        let capability_links = self
            .catalog
            .all_capabilities()
            .iter()
            .map(|capability| {
                Ok(LinkView::new(
                    self.capability_scope(capability).t("name")?,
                    self.href(&format!("/capabilities/{}", capability.slug)),
                ))
            })
            .collect::<Result<Vec<_>>>()?;

        let links = |list: &[NavLink]| {
            list.iter()
                .map(|link| Ok(LinkView::new(self.t(link.label_key)?, self.href(link.path))))
                .collect::<Result<Vec<_>>>()
        };

        Ok(FooterView {
            tagline: footer.s("tagline")?,
            sections: vec![
                FooterSection { title: footer.s("sectors")?, links: sector_links },
                FooterSection { title: footer.s("capabilities")?, links: capability_links },
                FooterSection { title: footer.s("company")?, links: links(COMPANY_LINKS)? },
            ],
            legal_title: footer.s("legal")?,
            legal: links(LEGAL_LINKS)?,
            copyright: format!("© {} HC-1. {}", Utc::now().year(), footer.t("copyright")?),
        })
    }

    /// Shared chrome for a page at `/{locale}{suffix}`
    pub fn layout(&self, suffix: &str, meta: PageMeta) -> Result<LayoutView> {
        let path = self.href(suffix);

        let nav = MAIN_NAV
            .iter()
            .map(|link| self.nav_item(link, suffix))
            .collect::<Result<Vec<_>>>()?;

        let languages = Locale::ALL
            .into_iter()
            .map(|locale| LanguageOption {
                code: locale.code().to_string(),
                name: locale.display_name().to_string(),
                flag: locale.flag().to_string(),
                href: switch_locale_path(&path, locale),
                current: locale == self.locale,
            })
            .collect();

        let mut alternates: Vec<AlternateLink> = Locale::ALL
            .into_iter()
            .map(|locale| AlternateLink {
                hreflang: locale.code().to_string(),
                href: format!("{}{}", SITE_METADATA.site_url, switch_locale_path(&path, locale)),
            })
            .collect();
        alternates.push(AlternateLink {
            hreflang: "x-default".to_string(),
            href: format!("{}{}", SITE_METADATA.site_url, switch_locale_path(&path, Locale::DEFAULT)),
        });

        Ok(LayoutView {
            lang: self.locale.code().to_string(),
            og_locale: self.locale.og_locale().to_string(),
            site_name: SITE_METADATA.site_name.to_string(),
            title: meta.title,
            description: meta.description,
            keywords: meta.keywords,
            canonical_url: format!("{}{}", SITE_METADATA.site_url, path),
            og_image: format!("{}{}", SITE_METADATA.site_url, SITE_METADATA.default_og_image),
            twitter_handle: SITE_METADATA.twitter_handle.to_string(),
            home_href: self.href(""),
            skip_to_content: self.s("nav.skipToContent")?,
            nav,
            language_label: self.s("nav.language")?,
            current_language: self.locale.display_name().to_string(),
            languages,
            alternates,
            footer: self.footer()?,
            path,
        })
    }

    fn page<T>(&self, suffix: &str, meta: PageMeta, body: T) -> Result<Page<T>> {
        Ok(Page {
            layout: self.layout(suffix, meta)?,
            body,
        })
    }

    // ========================================================================
    // Pages
    // ========================================================================

    pub fn home(&self) -> Result<Page<HomeView>> {
        let home = self.ns(Namespace::Home);

        let services = self
            .catalog
            .services()
            .iter()
            .map(|service| {
                let scope = home.nested(&format!("whatWeDo.services.{}", service.id));
                Ok(CardView {
                    id: service.id.to_string(),
                    icon: service.icon.to_string(),
                    title: scope.s("title")?,
                    description: scope.s("description")?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let steps = self
            .catalog
            .operating_steps()
            .iter()
            .enumerate()
            .map(|(i, step)| {
                let scope = home.nested(&format!("operatingModel.steps.{}", step.id));
                Ok(StepView {
                    number: format!("{:02}", i + 1),
                    label: scope.s("label")?,
                    description: scope.s("description")?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let signals = self
            .catalog
            .trust_signals()
            .iter()
            .map(|signal| {
                let scope = home.nested(&format!("trustSignals.signals.{}", signal.id));
                Ok(CardView {
                    id: signal.id.to_string(),
                    icon: signal.icon.to_string(),
                    title: scope.s("title")?,
                    description: scope.s("description")?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let sectors = self
            .catalog
            .all_sectors()
            .iter()
            .map(|s| self.sector_card(s))
            .collect::<Result<Vec<_>>>()?;

        let body = HomeView {
            hero: HeroView {
                title: home.s("hero.title")?,
                tagline: home.s("hero.subtitle")?,
                description: home.s("hero.statement")?,
                actions: vec![
                    ActionView {
                        label: home.s("hero.primaryCta")?,
                        href: self.href("/capabilities"),
                        primary: true,
                    },
                    ActionView {
                        label: home.s("hero.secondaryCta")?,
                        href: self.href("/contact"),
                        primary: false,
                    },
                ],
            },
            what_we_do_title: home.s("whatWeDo.title")?,
            services,
            sector_grid_title: home.s("sectorGrid.title")?,
            sector_grid_description: home.s("sectorGrid.description")?,
            sectors,
            operating_model_title: home.s("operatingModel.title")?,
            operating_model_description: home.s("operatingModel.description")?,
            steps,
            trust_title: home.s("trustSignals.title")?,
            signals,
            cta: self.home_cta()?,
        };

        let meta = if self.locale.is_default() {
            PageMeta {
                title: SITE_METADATA.default_title.to_string(),
                description: SITE_METADATA.default_description.to_string(),
                keywords: String::new(),
            }
        } else {
            PageMeta {
                title: self.s("meta.title")?,
                description: self.s("meta.description")?,
                keywords: String::new(),
            }
        };

        self.page("", meta, body)
    }

    pub fn about(&self) -> Result<Page<AboutView>> {
        let about = self.ns(Namespace::About);

        let body = AboutView {
            hero: HeroView {
                title: about.s("hero.title")?,
                tagline: about.s("hero.tagline")?,
                description: about.s("hero.description")?,
                actions: Vec::new(),
            },
            mission_heading: about.s("mission.heading")?,
            mission_paragraphs: about.list("mission.paragraphs", MISSION_PARAGRAPHS),
            pillars: self.cards_from_list(&about, "pillars", ABOUT_PILLARS),
            values_heading: about.s("values.heading")?,
            values: self.cards_from_list(&about, "values.items", ABOUT_VALUES),
            cta: self.home_cta()?,
        };

        let meta = PageMeta {
            title: self.titled(about.t("meta.title")?)?,
            description: about.s("meta.description")?,
            keywords: String::new(),
        };

        self.page("/about", meta, body)
    }

    pub fn sectors(&self) -> Result<Page<SectorIndexView>> {
        let sectors = self.ns(Namespace::Sectors).nested("index");

        let body = SectorIndexView {
            hero: HeroView {
                title: sectors.s("title")?,
                tagline: sectors.s("tagline")?,
                description: sectors.s("description")?,
                actions: Vec::new(),
            },
            sectors: self
                .catalog
                .all_sectors()
                .iter()
                .map(|s| self.sector_card(s))
                .collect::<Result<Vec<_>>>()?,
            learn_more: self.s("common.learnMore")?,
            cta: self.home_cta()?,
        };

        let meta = PageMeta {
            title: self.titled(sectors.t("title")?)?,
            description: sectors.s("description")?,
            keywords: String::new(),
        };

        self.page("/sectors", meta, body)
    }

    pub fn sector(&self, slug: &str) -> Result<Page<SectorDetailView>> {
        let sector = self.catalog.find_sector_by_slug(slug)?;
        let scope = self.sector_scope(sector);
        let detail = self.ns(Namespace::Sectors).nested("detail");

        let sections = self.catalog.sections_for(sector);
        if sections.is_none() {
            tracing::warn!("{} has no section row, rendering without its section table content", sector.slug);
        }

        let mut overview_heading = String::new();
        let mut overview_intro = String::new();
        let mut overview_columns = Vec::new();
        let mut risks_heading = String::new();
        let mut risk_groups = Vec::new();
        let mut approach_heading = String::new();
        let mut approach_intro = String::new();
        let mut approach_tabs = Vec::new();
        let mut value_heading = String::new();
        let mut value_metrics = Vec::new();
        let mut use_cases_heading = String::new();
        let mut use_cases = Vec::new();

        if let Some(sections) = sections {
            overview_heading = scope.s("overview.heading")?;
            overview_intro = scope.s("overview.intro")?;
            for column in sections.overview_columns {
                let column_scope = scope.nested(&format!("overview.{}", column.key()));
                overview_columns.push(OverviewColumnView {
                    key: column.key().to_string(),
                    icon: column.icon().to_string(),
                    title: column_scope.s("title")?,
                    points: column_scope.list("points", OVERVIEW_POINTS_PER_COLUMN),
                });
            }

            risks_heading = scope.s("risks.heading")?;
            for group in sections.risk_groups {
                let group_scope = scope.nested(&format!("risks.{}", group.key()));
                let labels = group_scope.list_field("items", RISK_ITEMS_PER_GROUP, "label");
                let details = group_scope.list_field("items", RISK_ITEMS_PER_GROUP, "details");
                risk_groups.push(RiskGroupView {
                    key: group.key().to_string(),
                    title: group_scope.s("title")?,
                    items: labels
                        .into_iter()
                        .zip(details)
                        .map(|(label, details)| RiskItemView { label, details })
                        .collect(),
                });
            }

            approach_heading = scope.s("approach.heading")?;
            approach_intro = scope.s("approach.intro")?;
            for tab in sections.approach_tabs {
                let tab_scope = scope.nested(&format!("approach.{}", tab.key()));
                approach_tabs.push(ApproachTabView {
                    key: tab.key().to_string(),
                    title: tab_scope.s("title")?,
                    description: tab_scope.s("description")?,
                    outcome: tab_scope.s("outcome")?,
                });
            }

            value_heading = scope.s("value.heading")?;
            for metric in sections.value_metrics {
                let metric_scope = scope.nested(&format!("value.{}", metric.key()));
                value_metrics.push(ValueMetricView {
                    key: metric.key().to_string(),
                    icon: metric.icon().to_string(),
                    metric: metric_scope.s("metric")?,
                    label: metric_scope.s("label")?,
                    impact: metric_scope.s("impact")?,
                    method: metric_scope.s("method")?,
                });
            }

            use_cases_heading = scope.s("useCases.heading")?;
            for case in sections.use_cases {
                let case_scope = scope.nested(&format!("useCases.{}", case.key()));
                use_cases.push(SectorUseCaseView {
                    key: case.key().to_string(),
                    title: case_scope.s("title")?,
                    description: case_scope.s("description")?,
                });
            }
        }

        let title = scope.s("title")?;
        let description = scope.s("description")?;

        let body = SectorDetailView {
            slug: sector.slug.to_string(),
            icon: sector.icon.as_str().to_string(),
            hero: HeroView {
                title: title.clone(),
                tagline: detail.s("tagline")?,
                description: scope.s("longDescription")?,
                actions: vec![ActionView {
                    label: detail.s("ctaButton")?,
                    href: self.href("/contact"),
                    primary: true,
                }],
            },
            challenges_heading: detail.s("challengesHeading")?,
            challenges_intro: detail.s("challengesIntro")?,
            challenges: scope.list("challenges", sector.challenges.len()),
            outcomes_heading: detail.s("outcomesHeading")?,
            outcomes_intro: detail.s("outcomesIntro")?,
            outcomes: scope.list("outcomes", sector.outcomes.len()),
            overview_heading,
            overview_intro,
            overview_columns,
            risks_heading,
            risk_groups,
            approach_heading,
            approach_intro,
            approach_tabs,
            outcome_label: self.s("common.outcome")?,
            value_heading,
            value_metrics,
            use_cases_heading,
            use_cases,
            capabilities_heading: detail.s("capabilitiesHeading")?,
            capabilities: self
                .catalog
                .capabilities_for_sector(sector)
                .into_iter()
                .map(|c| self.capability_card(c))
                .collect::<Result<Vec<_>>>()?,
            cta: CtaView {
                title: detail.s("ctaTitle")?,
                description: detail.s("ctaDescription")?,
                button: self.contact_button(detail.t("ctaButton")?),
            },
        };

        let meta = self.record_meta(&sector.metadata, self.titled(&title)?, description);
        self.page(&format!("/sectors/{}", sector.slug), meta, body)
    }

    pub fn capabilities(&self) -> Result<Page<CapabilityIndexView>> {
        let index = self.ns(Namespace::Capabilities).nested("index");

        let body = CapabilityIndexView {
            hero: HeroView {
                title: index.s("title")?,
                tagline: index.s("tagline")?,
                description: index.s("description")?,
                actions: Vec::new(),
            },
            capabilities: self
                .catalog
                .all_capabilities()
                .iter()
                .map(|c| self.capability_card(c))
                .collect::<Result<Vec<_>>>()?,
            learn_more: self.s("common.learnMore")?,
            cta: self.home_cta()?,
        };

        let meta = PageMeta {
            title: self.titled(index.t("title")?)?,
            description: index.s("description")?,
            keywords: String::new(),
        };

        self.page("/capabilities", meta, body)
    }

    pub fn capability(&self, slug: &str) -> Result<Page<CapabilityDetailView>> {
        let capability = self.catalog.find_capability_by_slug(slug)?;
        let scope = self.capability_scope(capability);
        let detail = self.ns(Namespace::CapabilityDetail);

        let name = scope.s("name")?;
        let tagline = scope.s("tagline")?;
        let description = scope.s("description")?;

        let features = capability
            .features
            .iter()
            .map(|feature| {
                let f = scope.nested(&format!("features.{}", feature.key));
                Ok(CardView {
                    id: feature.key.to_string(),
                    icon: String::new(),
                    title: f.s("title")?,
                    description: f.s("description")?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let use_cases = capability
            .use_cases
            .iter()
            .enumerate()
            .map(|(i, use_case)| {
                let u = scope.nested(&format!("useCases.{}", i));
                let (sector_label, sector_href) = match self.catalog.find_sector_by_slug(use_case.sector) {
                    Ok(sector) => (
                        self.sector_scope(sector).s("title")?,
                        self.href(&format!("/sectors/{}", sector.slug)),
                    ),
                    Err(_) => {
                        tracing::warn!("{} use case points at unknown sector '{}'", capability.slug, use_case.sector);
                        (String::new(), String::new())
                    }
                };
                Ok(UseCaseView {
                    title: u.s("title")?,
                    description: u.s("description")?,
                    outcome: u.s("outcome")?,
                    sector_label,
                    sector_href,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let related = self
            .catalog
            .related_capabilities(capability)
            .into_iter()
            .map(|c| self.capability_card(c))
            .collect::<Result<Vec<_>>>()?;

        let body = CapabilityDetailView {
            slug: capability.slug.to_string(),
            hero: HeroView {
                title: name.clone(),
                tagline: tagline.clone(),
                description: description.clone(),
                actions: vec![ActionView {
                    label: detail.s("requestInfo")?,
                    href: self.href("/contact"),
                    primary: true,
                }],
            },
            features_heading: detail.s("keyFeatures")?,
            features,
            use_cases_heading: detail.s("useCases")?,
            use_cases,
            outcome_label: self.s("common.outcome")?,
            integrates_heading: detail.s("integratesWith")?,
            integrates_description: format!("{} {}", name, detail.t("integratesDescription")?),
            related,
            cta: CtaView {
                title: format!("{} {}", detail.t("learnMore")?, name),
                description: detail.s("learnMoreDescription")?,
                button: self.contact_button(detail.t("requestInfo")?),
            },
        };

        let meta = self.record_meta(&capability.metadata, format!("{} | {}", name, tagline), description);
        self.page(&format!("/capabilities/{}", capability.slug), meta, body)
    }

    pub fn contact(&self) -> Result<Page<ContactView>> {
        let contact = self.ns(Namespace::Contact);
        let form = contact.nested("form");

        let inquiry_types = INQUIRY_TYPES
            .iter()
            .map(|key| {
                Ok(OptionView {
                    value: key.to_string(),
                    label: contact.s(&format!("inquiryTypes.{}", key))?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let sectors = self
            .catalog
            .all_sectors()
            .iter()
            .map(|sector| {
                Ok(OptionView {
                    value: sector.slug.to_string(),
                    label: self.sector_scope(sector).s("title")?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let body = ContactView {
            hero: HeroView {
                title: contact.s("hero.title")?,
                tagline: contact.s("hero.tagline")?,
                description: contact.s("hero.description")?,
                actions: Vec::new(),
            },
            form: ContactFormView {
                name_label: form.s("name")?,
                name_placeholder: form.s("namePlaceholder")?,
                email_label: form.s("email")?,
                email_placeholder: form.s("emailPlaceholder")?,
                organization_label: form.s("organization")?,
                organization_placeholder: form.s("organizationPlaceholder")?,
                role_label: form.s("role")?,
                role_placeholder: form.s("rolePlaceholder")?,
                inquiry_label: form.s("inquiryType")?,
                inquiry_types,
                sector_label: form.s("sector")?,
                sectors,
                select_placeholder: form.s("selectPlaceholder")?,
                message_label: form.s("message")?,
                message_placeholder: form.s("messagePlaceholder")?,
                consent: form.s("consent")?,
                submit: form.s("submit")?,
                notice: form.s("notice")?,
            },
        };

        let meta = PageMeta {
            title: self.titled(contact.t("meta.title")?)?,
            description: contact.s("meta.description")?,
            keywords: String::new(),
        };

        self.page("/contact", meta, body)
    }

    fn insight_card(&self, insight: &Insight, months: &[String]) -> Result<InsightCard> {
        let insights = self.ns(Namespace::Insights);
        let date_label = match insight.published_date() {
            Some(date) => localized_date(self.locale, date, months),
            None => insight.published_at.to_string(),
        };

        Ok(InsightCard {
            slug: insight.slug.to_string(),
            title: insight.title.to_string(),
            excerpt: insight.excerpt.to_string(),
            category: insight.category.as_str().to_string(),
            category_label: insights.s(&format!("categories.{}", insight.category.as_str()))?,
            date: insight.published_at.to_string(),
            date_label,
            reading_time: format!("{} {}", insight.reading_minutes, insights.t("minRead")?),
            tags: insight.tags.iter().map(|t| t.to_string()).collect(),
        })
    }

    pub fn insights(&self) -> Result<Page<InsightsView>> {
        let insights = self.ns(Namespace::Insights);
        let months = self.ns(Namespace::Common).list("months", MONTHS);

        let mut featured = Vec::new();
        let mut rest = Vec::new();
        for insight in self.catalog.insights_featured_first() {
            let card = self.insight_card(insight, &months)?;
            if insight.featured && featured.is_empty() {
                featured.push(card);
            } else {
                rest.push(card);
            }
        }

        let body = InsightsView {
            hero: HeroView {
                title: insights.s("hero.title")?,
                tagline: insights.s("hero.tagline")?,
                description: insights.s("hero.description")?,
                actions: Vec::new(),
            },
            featured_label: insights.s("featured")?,
            featured,
            insights: rest,
            coming_soon: insights.s("comingSoon")?,
        };

        let meta = PageMeta {
            title: self.titled(insights.t("meta.title")?)?,
            description: insights.s("meta.description")?,
            keywords: String::new(),
        };

        self.page("/insights", meta, body)
    }

    /// Localized 404 for a path under this locale
    pub fn not_found(&self, suffix: &str) -> Result<Page<NotFoundView>> {
        let nf = self.ns(Namespace::NotFound);
        let body = NotFoundView {
            title: nf.s("title")?,
            heading: nf.s("heading")?,
            description: nf.s("description")?,
            home: LinkView::new(nf.t("home")?, self.href("")),
        };
        let meta = PageMeta {
            title: self.titled(nf.t("title")?)?,
            description: nf.s("description")?,
            keywords: String::new(),
        };
        self.page(suffix, meta, body)
    }

    /// Localized "something went wrong" page; retry points back at `suffix`
    pub fn error_page(&self, suffix: &str) -> Result<Page<ErrorView>> {
        let err = self.ns(Namespace::Error);
        let body = ErrorView {
            title: err.s("title")?,
            description: err.s("description")?,
            retry: LinkView::new(err.t("retry")?, self.href(suffix)),
            home: LinkView::new(err.t("home")?, self.href("")),
        };
        let meta = PageMeta {
            title: self.titled(err.t("title")?)?,
            description: err.s("description")?,
            keywords: String::new(),
        };
        self.page(suffix, meta, body)
    }
}

/// `December 15, 2024` / `15 décembre 2024` / `15 de dezembro de 2024`
pub fn localized_date(locale: Locale, date: NaiveDate, months: &[String]) -> String {
    let month = months
        .get(date.month0() as usize)
        .cloned()
        .unwrap_or_else(|| date.month().to_string());

    match locale {
        Locale::En => format!("{} {}, {}", month, date.day(), date.year()),
        Locale::Fr => format!("{} {} {}", date.day(), month, date.year()),
        Locale::Pt => format!("{} de {} de {}", date.day(), month, date.year()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixtures() -> (Catalog, Translator) {
        (Catalog::builtin().unwrap(), Translator::builtin().unwrap())
    }

    #[test]
    fn test_every_page_builds_in_every_locale() {
        let (catalog, translator) = fixtures();
        for locale in Locale::ALL {
            let b = PageBuilder::new(&catalog, &translator, locale);
            b.home().unwrap();
            b.about().unwrap();
            b.sectors().unwrap();
            b.capabilities().unwrap();
            b.contact().unwrap();
            b.insights().unwrap();
            b.not_found("/nope").unwrap();
            b.error_page("/about").unwrap();
            for sector in catalog.all_sectors() {
                b.sector(sector.slug).unwrap();
            }
            for capability in catalog.all_capabilities() {
                b.capability(capability.slug).unwrap();
            }
        }
    }

    #[test]
    fn test_sector_detail_follows_section_table() {
        let (catalog, translator) = fixtures();
        let page = PageBuilder::new(&catalog, &translator, Locale::Fr)
            .sector("energy-mining")
            .unwrap();

        let groups: Vec<_> = page.body.risk_groups.iter().map(|g| g.key.as_str()).collect();
        assert_eq!(groups, vec!["production", "revenueGaps"]);
        assert!(page.body.risk_groups.iter().all(|g| g.items.len() == RISK_ITEMS_PER_GROUP));

        let tabs: Vec<_> = page.body.approach_tabs.iter().map(|t| t.key.as_str()).collect();
        assert_eq!(tabs, vec!["architecture", "integration", "continuity"]);

        let caps: Vec<_> = page.body.capabilities.iter().map(|c| c.slug.as_str()).collect();
        assert_eq!(caps, vec!["hybrid-cyber", "hybrid-iris", "hybrid-axis"]);
        assert_eq!(page.body.challenges.len(), 4);
        assert_eq!(page.body.outcomes.len(), 3);

        let columns: Vec<_> = page.body.overview_columns.iter().map(|c| c.key.as_str()).collect();
        assert_eq!(columns, vec!["revenue", "risks", "exposure"]);
        assert!(page.body.overview_columns.iter().all(|c| c.points.len() == OVERVIEW_POINTS_PER_COLUMN));
        assert_eq!(page.body.overview_columns[0].icon, "shield");

        let metrics: Vec<_> = page.body.value_metrics.iter().map(|m| m.key.as_str()).collect();
        assert_eq!(metrics, vec!["uptime", "downtime", "confidence"]);
        assert_eq!(
            page.body.value_metrics[0].label,
            translator.resolve(Locale::Fr, "sectors.energyMining.value.uptime.label").unwrap()
        );

        let cases: Vec<_> = page.body.use_cases.iter().map(|c| c.key.as_str()).collect();
        assert_eq!(cases, vec!["offshore", "mining", "pipeline"]);
    }

    #[test]
    fn test_overview_columns_differ_per_sector() {
        let (catalog, translator) = fixtures();
        let page = PageBuilder::new(&catalog, &translator, Locale::Pt)
            .sector("ai-fusion-intelligence")
            .unwrap();

        let columns: Vec<_> = page.body.overview_columns.iter().map(|c| c.key.as_str()).collect();
        assert_eq!(columns, vec!["dataVolume", "latency", "integration"]);
        assert!(!page.body.overview_heading.is_empty());
        assert!(!page.body.use_cases_heading.is_empty());
    }

    #[test]
    fn test_unknown_slug_is_not_found() {
        let (catalog, translator) = fixtures();
        let b = PageBuilder::new(&catalog, &translator, Locale::En);
        assert!(b.sector("unknown-sector").unwrap_err().is_not_found());
        assert!(b.capability("hybrid-omega").unwrap_err().is_not_found());
    }

    #[test]
    fn test_capability_detail_in_french() {
        let (catalog, translator) = fixtures();
        let page = PageBuilder::new(&catalog, &translator, Locale::Fr)
            .capability("hybrid-vector")
            .unwrap();

        let related: Vec<_> = page.body.related.iter().map(|c| c.slug.as_str()).collect();
        assert_eq!(related, vec!["hybrid-nexus", "hybrid-cyber"]);
        assert!(page.body.related.iter().all(|c| c.href.starts_with("/fr/capabilities/")));

        assert_eq!(page.body.hero.title, translator.resolve(Locale::Fr, "capabilities.hybridVector.name").unwrap());
        assert_eq!(page.body.features.len(), 3);
        assert_eq!(page.body.use_cases[0].sector_href, "/fr/sectors/government-national-programs");
        assert_eq!(page.layout.lang, "fr");
    }

    #[test]
    fn test_metadata_rule() {
        let (catalog, translator) = fixtures();
        let en = PageBuilder::new(&catalog, &translator, Locale::En).sector("energy-mining").unwrap();
        assert_eq!(en.layout.title, "Energy & Mining Security | HC-1");
        assert!(en.layout.keywords.contains("mining security"));

        let pt = PageBuilder::new(&catalog, &translator, Locale::Pt).sector("energy-mining").unwrap();
        let expected = format!(
            "{} | HC-1",
            translator.resolve(Locale::Pt, "sectors.energyMining.title").unwrap()
        );
        assert_eq!(pt.layout.title, expected);
        assert_eq!(pt.layout.keywords, en.layout.keywords);
    }

    #[test]
    fn test_layout_switcher_and_alternates() {
        let (catalog, translator) = fixtures();
        let page = PageBuilder::new(&catalog, &translator, Locale::En).sector("energy-mining").unwrap();
        let layout = &page.layout;

        assert_eq!(layout.path, "/en/sectors/energy-mining");
        assert_eq!(layout.canonical_url, "https://hc-1.com/en/sectors/energy-mining");

        let pt = layout.languages.iter().find(|l| l.code == "pt").unwrap();
        assert_eq!(pt.href, "/pt/sectors/energy-mining");
        assert!(layout.languages.iter().filter(|l| l.current).all(|l| l.code == "en"));

        let hreflangs: Vec<_> = layout.alternates.iter().map(|a| a.hreflang.as_str()).collect();
        assert_eq!(hreflangs, vec!["en", "fr", "pt", "x-default"]);

        let active: Vec<_> = layout.nav.iter().filter(|n| n.active).map(|n| n.href.as_str()).collect();
        assert_eq!(active, vec!["/en/sectors"]);

        let sectors_nav = layout.nav.iter().find(|n| n.href == "/en/sectors").unwrap();
        assert_eq!(sectors_nav.children.len(), catalog.all_sectors().len());
        assert_eq!(layout.footer.legal.len(), 4);
    }

    #[test]
    fn test_insights_featured_first_with_localized_dates() {
        let (catalog, translator) = fixtures();
        let page = PageBuilder::new(&catalog, &translator, Locale::Fr).insights().unwrap();
        assert_eq!(page.body.featured.len(), 1);
        assert_eq!(page.body.featured[0].date_label, "15 décembre 2024");
        assert_eq!(page.body.insights.len(), 2);
        assert!(page.body.featured[0].reading_time.starts_with("8 "));
    }

    #[test]
    fn test_localized_date_formats() {
        let months: Vec<String> = ["January", "February", "March"].iter().map(|m| m.to_string()).collect();
        let date = NaiveDate::from_ymd_opt(2024, 2, 5).unwrap();
        assert_eq!(localized_date(Locale::En, date, &months), "February 5, 2024");
        assert_eq!(localized_date(Locale::Pt, date, &months), "5 de February de 2024");

        let december = NaiveDate::from_ymd_opt(2024, 12, 1).unwrap();
        assert_eq!(localized_date(Locale::Fr, december, &months), "1 12 2024");
    }
}

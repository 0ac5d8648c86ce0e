// Site integration tests
//
// Drives the full router (routing, locale guard, page cache, templates)
// with in-process requests. Run with: cargo test --test site_integration_tests

#[cfg(feature = "web")]
mod site_tests {
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        Router,
    };
    use hc1_site::{create_router, AppState, Locale, SiteConfig};
    use serde_json::Value;
    use tower::ServiceExt; // for oneshot

    async fn create_test_state() -> AppState {
        AppState::new(SiteConfig::default())
            .await
            .expect("builtin content should pass startup validation")
    }

    async fn create_test_app() -> Router {
        create_router(create_test_state().await)
    }

    async fn get(app: Router, uri: &str) -> axum::response::Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_text(response: axum::response::Response) -> String {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");
        String::from_utf8(body.to_vec()).expect("Body is not UTF-8")
    }

    // =========================================================================
    // Section 1: Health and root redirect
    // =========================================================================

    #[tokio::test]
    async fn test_health_check() {
        let response = get(create_test_app().await, "/health").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "healthy");
        assert!(json["timestamp"].is_string());
        assert_eq!(json["catalog"]["sectors"], 6);
        assert_eq!(json["catalog"]["capabilities"], 6);
        assert_eq!(json["locales"], serde_json::json!(["en", "fr", "pt"]));
    }

    #[tokio::test]
    async fn test_root_redirects_to_negotiated_locale() {
        let response = create_test_app()
            .await
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header(header::ACCEPT_LANGUAGE, "fr-CA,fr;q=0.9,en;q=0.5")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(response.headers()[header::LOCATION], "/fr");
    }

    #[tokio::test]
    async fn test_root_without_header_uses_default_locale() {
        let response = get(create_test_app().await, "/").await;
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(response.headers()[header::LOCATION], "/en");
    }

    // =========================================================================
    // Section 2: Request scenarios
    // =========================================================================

    #[tokio::test]
    async fn test_french_capability_page() {
        let response = get(create_test_app().await, "/fr/capabilities/hybrid-vector").await;
        assert_eq!(response.status(), StatusCode::OK);

        let html = body_text(response).await;
        assert!(html.contains("<html lang=\"fr\""));
        assert!(html.contains("Évaluation stratégique des menaces"));
        assert!(html.contains("Fonctionnalités clés"));
        // Related capabilities come from `integrations`
        assert!(html.contains("/fr/capabilities/hybrid-nexus"));
        assert!(html.contains("/fr/capabilities/hybrid-cyber"));
        // Language switcher keeps the rest of the path
        assert!(html.contains("/en/capabilities/hybrid-vector"));
        assert!(html.contains("/pt/capabilities/hybrid-vector"));
    }

    #[tokio::test]
    async fn test_unknown_sector_is_localized_not_found() {
        let response = get(create_test_app().await, "/en/sectors/unknown-sector").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let html = body_text(response).await;
        assert!(html.contains("<html lang=\"en\""));
        assert!(html.contains("Page Not Found"));
        // Rendered inside the site layout
        assert!(html.contains("class=\"main-nav\""));
        assert!(html.contains("href=\"/en\""));
    }

    #[tokio::test]
    async fn test_unsupported_locale_is_static_not_found() {
        let response = get(create_test_app().await, "/de/about").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let html = body_text(response).await;
        assert!(html.contains("404"));
        assert!(!html.contains("class=\"main-nav\""));
        assert!(!html.contains("hreflang"));
    }

    #[tokio::test]
    async fn test_locale_segment_is_case_sensitive() {
        let response = get(create_test_app().await, "/EN/about").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(!body_text(response).await.contains("class=\"main-nav\""));
    }

    #[tokio::test]
    async fn test_unknown_route_under_locale_is_localized() {
        let response = get(create_test_app().await, "/pt/nowhere/at-all").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let html = body_text(response).await;
        assert!(html.contains("<html lang=\"pt\""));
        assert!(html.contains("class=\"main-nav\""));
    }

    #[tokio::test]
    async fn test_unknown_route_without_locale_is_static() {
        let response = get(create_test_app().await, "/nowhere").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(!body_text(response).await.contains("class=\"main-nav\""));
    }

    // =========================================================================
    // Section 3: Every page in every locale
    // =========================================================================

    #[tokio::test]
    async fn test_all_pages_render_in_all_locales() {
        let state = create_test_state().await;

        let mut suffixes: Vec<String> = ["", "/about", "/sectors", "/capabilities", "/contact", "/insights"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        for sector in state.catalog.all_sectors() {
            suffixes.push(format!("/sectors/{}", sector.slug));
        }
        for capability in state.catalog.all_capabilities() {
            suffixes.push(format!("/capabilities/{}", capability.slug));
        }

        let app = create_router(state);
        for locale in Locale::ALL {
            for suffix in &suffixes {
                let uri = format!("/{}{}", locale.code(), suffix);
                let response = get(app.clone(), &uri).await;
                assert_eq!(response.status(), StatusCode::OK, "{} failed", uri);

                let html = body_text(response).await;
                assert!(html.contains(&format!("<html lang=\"{}\"", locale.code())), "{} has wrong lang", uri);
                assert!(html.contains("hreflang=\"x-default\""), "{} has no alternates", uri);
            }
        }
    }

    #[tokio::test]
    async fn test_sector_page_has_risks_and_approach() {
        let response = get(create_test_app().await, "/en/sectors/cyber-resilience").await;
        assert_eq!(response.status(), StatusCode::OK);

        let html = body_text(response).await;
        assert!(html.contains("id=\"risk-threats\""));
        assert!(html.contains("id=\"risk-compliance\""));
        assert!(html.contains("id=\"approach-zerotrust\""));
        assert!(html.contains("id=\"approach-soc\""));
        assert!(html.contains("id=\"approach-intelligence\""));
    }

    #[tokio::test]
    async fn test_sector_pages_follow_their_overview_and_value_tables() {
        let app = create_test_app().await;

        let cyber = body_text(get(app.clone(), "/en/sectors/cyber-resilience").await).await;
        for id in ["overview-landscape", "overview-gaps", "overview-impact"] {
            assert!(cyber.contains(&format!("id=\"{}\"", id)), "cyber-resilience missing {}", id);
        }
        assert!(!cyber.contains("id=\"overview-revenue\""));

        let energy = body_text(get(app.clone(), "/fr/sectors/energy-mining").await).await;
        for id in ["overview-revenue", "overview-risks", "overview-exposure"] {
            assert!(energy.contains(&format!("id=\"{}\"", id)), "energy-mining missing {}", id);
        }
        assert!(!energy.contains("id=\"overview-landscape\""));

        let fusion = body_text(get(app, "/pt/sectors/ai-fusion-intelligence").await).await;
        for id in ["overview-dataVolume", "overview-latency", "overview-integration"] {
            assert!(fusion.contains(&format!("id=\"{}\"", id)), "ai-fusion-intelligence missing {}", id);
        }

        for html in [&cyber, &energy, &fusion] {
            for id in ["value-uptime", "value-downtime", "value-confidence"] {
                assert!(html.contains(&format!("id=\"{}\"", id)), "missing {}", id);
            }
            for id in ["usecase-offshore", "usecase-mining", "usecase-pipeline"] {
                assert!(html.contains(&format!("id=\"{}\"", id)), "missing {}", id);
            }
        }
    }

    #[tokio::test]
    async fn test_insights_featured_first() {
        let response = get(create_test_app().await, "/en/insights").await;
        let html = body_text(response).await;

        let featured = html
            .find("id=\"evolution-of-critical-infrastructure-protection\"")
            .expect("featured insight missing");
        let other = html.find("id=\"ai-in-national-security\"").expect("insight missing");
        assert!(featured < other);
        assert!(html.contains("December 15, 2024"));
    }

    #[tokio::test]
    async fn test_contact_form_has_no_submission_target() {
        let html = body_text(get(create_test_app().await, "/fr/contact").await).await;
        assert!(html.contains("class=\"contact-form\""));
        assert!(!html.contains("action="));
        assert!(!html.contains("method=\"post\""));
    }

    // =========================================================================
    // Section 4: Page cache
    // =========================================================================

    #[tokio::test]
    async fn test_successful_pages_are_cached() {
        let state = create_test_state().await;
        let app = create_router(state.clone());

        let first = body_text(get(app.clone(), "/pt/about").await).await;
        assert!(state.page_cache.get("/pt/about").await.is_some());

        let second = body_text(get(app, "/pt/about").await).await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_not_found_pages_are_not_cached() {
        let state = create_test_state().await;
        let app = create_router(state.clone());

        let response = get(app, "/en/sectors/unknown-sector").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(state.page_cache.get("/en/sectors/unknown-sector").await.is_none());
    }
}

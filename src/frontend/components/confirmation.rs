use crate::i18n::Catalog;
use leptos::prelude::*;

pub const HEADING: &str = "Contact Us";
pub const THANK_YOU: &str =
    "Thank you for submitting a request! We will contact you within 24 hours.";
pub const DASHBOARD_LABEL: &str = "Go to my Dashboard";
pub const HOMEPAGE_LABEL: &str = "Go to edX Home";

/// The single call to action shown under the thank-you message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionLink {
    pub href: String,
    /// Untranslated label
    pub label: &'static str,
}

pub fn action_link(is_logged_in: bool, homepage_url: &str, dashboard_url: &str) -> ActionLink {
    if is_logged_in {
        ActionLink {
            href: dashboard_url.to_string(),
            label: DASHBOARD_LABEL,
        }
    } else {
        ActionLink {
            href: homepage_url.to_string(),
            label: HOMEPAGE_LABEL,
        }
    }
}

/// Shown once a support request has been submitted.
///
/// Signed-in viewers are sent to their dashboard, everyone else to the
/// homepage. URLs are rendered as given.
#[component]
pub fn ConfirmationView(
    #[prop(into)] homepage_url: String,
    #[prop(into)] dashboard_url: String,
    is_logged_in: bool,
    catalog: Catalog,
) -> impl IntoView {
    let link = action_link(is_logged_in, &homepage_url, &dashboard_url);
    tracing::debug!("Rendering confirmation with link to {}", link.href);

    view! {
        <div class="contact-us-wrapper">
            <div class="row">
                <div class="col-sm-12">
                    <h2>{catalog.gettext(HEADING)}</h2>
                </div>
            </div>

            <div class="row">
                <div class="col-sm-12">
                    <p>{catalog.gettext(THANK_YOU)}</p>
                </div>
            </div>

            <div class="row">
                <div class="col-sm-12">
                    <a href=link.href class="btn btn-secondary help-button">
                        {catalog.gettext(link.label)}
                    </a>
                </div>
            </div>
        </div>
    }
}

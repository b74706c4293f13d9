//! Plot gallery shown after a successful upload.

use leptos::*;

/// Build the `src` attribute for one returned plot.
///
/// The backend sends bare base64; the data-URI prefix is added here.
pub fn data_uri(encoded: &str) -> String {
    format!("data:image/png;base64,{}", encoded)
}

/// Position-derived caption, 1-based.
pub fn plot_caption(index: usize) -> String {
    format!("Plot {}", index + 1)
}

/// Renders the returned plots in order. An empty list renders an empty
/// gallery with no placeholder. No lazy loading; the expected scale is
/// a handful of images.
#[component]
pub fn Gallery(images: Vec<String>) -> impl IntoView {
    view! {
        <div class="gallery" id="gallery">
            {images
                .into_iter()
                .enumerate()
                .map(|(idx, encoded)| {
                    let caption = plot_caption(idx);
                    view! {
                        <figure class="gallery-item">
                            <img src=data_uri(&encoded) alt=caption.clone()/>
                            <figcaption>{caption}</figcaption>
                        </figure>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_uri_prefixes_the_raw_base64() {
        assert_eq!(data_uri("QQ=="), "data:image/png;base64,QQ==");
    }

    #[test]
    fn captions_are_one_based() {
        assert_eq!(plot_caption(0), "Plot 1");
        assert_eq!(plot_caption(1), "Plot 2");
    }
}

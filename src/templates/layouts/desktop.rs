use maud::{html, Markup, PreEscaped, DOCTYPE};

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; max-width: 760px; margin: 2rem auto; padding: 0 1rem; color: #1f2937; }
header { display: flex; align-items: center; gap: 0.75rem; margin-bottom: 1.5rem; }
.card { border: 1px solid #e5e7eb; border-radius: 8px; padding: 1rem 1.25rem; margin-bottom: 1.25rem; }
.grid { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; }
label { display: block; font-weight: 600; margin-bottom: 0.25rem; }
select, input[type=number] { width: 100%; padding: 0.4rem; font-size: 1rem; }
button.primary { width: 100%; padding: 0.6rem; font-size: 1rem; background: #524ed2; color: white; border: none; border-radius: 6px; cursor: pointer; }
.alert { background: #fef2f2; color: #b91c1c; border: 1px solid #fecaca; border-radius: 6px; padding: 0.75rem; }
.price { font-size: 2rem; font-weight: 700; color: #15803d; }
table { width: 100%; border-collapse: collapse; }
td { padding: 0.3rem 0; border-bottom: 1px solid #f3f4f6; }
td.num { text-align: right; font-variant-numeric: tabular-nums; }
footer, .caption { color: #6b7280; font-size: 0.85rem; }
"#;

pub fn desktop_layout(title: &str, model_label: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(STYLE)) }
            }
            body {
                header {
                    svg
                        xmlns="http://www.w3.org/2000/svg"
                        width="28"
                        height="28"
                        viewBox="0 0 24 24"
                        fill="none"
                        stroke="#524ed2"
                        stroke-width="2"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                    {
                        path stroke="none" d="M0 0h24v24H0z" fill="none" {}
                        path d="M5 12l-2 0l9 -9l9 9l-2 0" {}
                        path d="M5 12v7a2 2 0 0 0 2 2h10a2 2 0 0 0 2 -2v-7" {}
                        path d="M9 21v-6a2 2 0 0 1 2 -2h2a2 2 0 0 1 2 2v6" {}
                    }
                    h1 { "London Property Price Estimator" }
                }
                (content)
                footer { "Model " (model_label) }
            }
        }
    }
}

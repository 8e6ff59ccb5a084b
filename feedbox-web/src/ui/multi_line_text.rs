use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct MultiLineTextProps {
    pub text: String,
}

#[derive(Debug, Eq, PartialEq)]
enum Line<'a> {
    Text(&'a str),
    Blank,
}

fn split_lines(text: &str) -> Vec<Line<'_>> {
    text.lines()
        .map(|l| match l.trim().is_empty() {
            true => Line::Blank,
            false => Line::Text(l),
        })
        .collect()
}

#[function_component(MultiLineText)]
pub fn multi_line_text(p: &MultiLineTextProps) -> Html {
    // empty paragraphs have no height, so blank lines get a line break instead
    let lines = split_lines(&p.text).into_iter().map(|l| match l {
        Line::Text(t) => html! { <p class="mb-1">{ t }</p> },
        Line::Blank => html! { <br /> },
    });
    html! {
        <div class="multi-line-text">
            { for lines }
        </div>
    }
}

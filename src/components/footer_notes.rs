//! Footer Notes Component

use leptos::prelude::*;

const NOTES: [&str; 3] = [
    "استخدم الأدوات كمُسرّع لا كبديل، وحافظ على صوتك الشخصي دائمًا.",
    "كرّر على دفعات قصيرة: عصف → مخطط → مسودة → تحرير → مراجعة أقران.",
    "احفظ الأصالة والأخلاقيات: إفصاح عن استخدام الأدوات ورصد التحيّزات وتجنّب محاكاة مؤلف بعينه.",
];

#[component]
pub fn FooterNotes() -> impl IntoView {
    view! {
        <footer class="footer-notes">
            <span class="footer-title">"ملاحظات سريعة"</span>
            <ul>
                {NOTES.iter().map(|note| view! { <li>{*note}</li> }).collect_view()}
            </ul>
        </footer>
    }
}

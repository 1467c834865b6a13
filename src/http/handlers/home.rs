use axum::response::Html;

const HOME_PAGE: &str = r#"<html>
    <head><title>API SPK Laptop</title></head>
    <body style="font-family:sans-serif;text-align:center;padding:50px;background:#1c1c1c;color:white;">
        <h1>API SPK Laptop - Metode SAW</h1>
        <p>Gunakan endpoint <strong>/api/hitung</strong> untuk perhitungan.</p>
    </body>
</html>
"#;

pub async fn home() -> Html<&'static str> {
    Html(HOME_PAGE)
}

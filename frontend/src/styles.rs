pub const INVITATION_CSS: &str = r#"
    .invitation-page {
        min-height: 100vh;
        background-color: #eeeeee;
        font-family: "Noto Serif KR", "Apple SD Gothic Neo", serif;
    }
    .invitation-column {
        max-width: 28rem;
        margin: 0 auto;
        overflow-x: hidden;
        background-color: #eeeeee;
    }

    .header {
        position: relative;
        height: 100vh;
        display: flex;
        align-items: center;
        justify-content: center;
        overflow: hidden;
    }
    .header-backdrop {
        position: absolute;
        inset: 0;
        background: linear-gradient(to bottom right, #f5f5f5, #eeeeee, #e8e8e8);
    }
    .header-content {
        position: relative;
        z-index: 10;
        text-align: center;
        padding: 0 2rem;
        transition: opacity 0.2s linear;
    }
    .header-card {
        background: rgba(255, 255, 255, 0.95);
        padding: 3rem 2rem;
        border-radius: 1rem;
        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
    }
    .header-photo-style {
        background-size: cover;
        background-position: center;
    }
    .header-shade {
        position: absolute;
        inset: 0;
        background: linear-gradient(to bottom, rgba(0, 0, 0, 0.1), rgba(0, 0, 0, 0.45));
    }
    .header-content-light .header-kicker,
    .header-content-light .header-names,
    .header-content-light .header-date,
    .header-content-light .header-venue {
        color: #ffffff;
    }
    .header-kicker {
        font-size: 0.875rem;
        letter-spacing: 0.05em;
        margin-bottom: 0.75rem;
        color: #667788;
    }
    .header-divider {
        width: 1px;
        height: 3rem;
        margin: 0 auto 1.5rem;
        background-color: #d4d4d4;
    }
    .header-names {
        font-size: 2.25rem;
        font-weight: 300;
        margin-bottom: 2rem;
        color: #3a4556;
    }
    .header-names span {
        display: block;
        margin-bottom: 0.5rem;
    }
    .header-photo {
        margin-bottom: 2rem;
        overflow: hidden;
        border-radius: 0.75rem;
        box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
    }
    .header-photo img {
        display: block;
        width: 18rem;
        height: 18rem;
        margin: 0 auto;
        object-fit: cover;
    }
    .header-date {
        font-size: 1.125rem;
        font-weight: 300;
        color: #3a4556;
    }
    .header-venue {
        font-size: 0.875rem;
        color: #667788;
    }

    .reveal-section {
        padding: 6rem 2rem;
        transition: opacity 1s ease, transform 1s ease;
    }
    .reveal-section.is-hidden {
        opacity: 0;
    }
    .reveal-section.is-lowered {
        transform: translateY(2.5rem);
    }
    .reveal-section.is-revealed {
        opacity: 1;
        transform: translateY(0);
    }
    .section-heading {
        text-align: center;
        margin-bottom: 3rem;
    }
    .section-kicker {
        font-size: 0.875rem;
        letter-spacing: 0.05em;
        margin-bottom: 0.75rem;
        color: #667788;
    }
    .section-rule {
        width: 4rem;
        height: 1px;
        margin: 0 auto;
        background-color: #c8c8c8;
    }
    .section-title {
        text-align: center;
        font-size: 1.125rem;
        font-weight: 300;
        margin-bottom: 2rem;
        color: #3a4556;
    }
    .section-lead {
        text-align: center;
        margin-bottom: 2.5rem;
        color: #667788;
    }
    .card {
        max-width: 24rem;
        margin: 0 auto;
        background: #ffffff;
        border-radius: 1rem;
        box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
    }

    .greeting-text {
        max-width: 24rem;
        margin: 0 auto;
        text-align: center;
        line-height: 1.625;
        color: #4a5668;
    }
    .greeting-text p + p {
        margin-top: 1.5rem;
    }
    .greeting-divider {
        width: 1px;
        height: 4rem;
        margin: 3rem auto;
        background-color: #d4d4d4;
    }
    .families {
        display: flex;
        justify-content: center;
        align-items: center;
        gap: 2rem;
        text-align: center;
        color: #4a5668;
        animation-delay: 0.8s;
    }
    .families-rule {
        width: 1px;
        height: 3rem;
        background-color: #d4d4d4;
    }
    .family-side {
        font-size: 0.875rem;
        margin-bottom: 0.25rem;
        color: #667788;
    }

    .gallery-grid {
        display: grid;
        grid-template-columns: repeat(2, minmax(0, 1fr));
        gap: 0.75rem;
        max-width: 24rem;
        margin: 0 auto;
    }
    .gallery-tile {
        overflow: hidden;
        border-radius: 0.5rem;
        box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1);
        transition: box-shadow 0.3s ease;
    }
    .gallery-tile:hover {
        box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
    }
    .gallery-wide {
        grid-column: span 2 / span 2;
    }
    .gallery-image {
        width: 100%;
        height: 10rem;
        background-size: cover;
        background-repeat: no-repeat;
        transition: transform 0.5s ease;
    }
    .gallery-wide .gallery-image {
        height: 16rem;
    }
    .gallery-image:hover {
        transform: scale(1.05);
    }

    .calendar-card {
        padding: 1.5rem;
    }
    .calendar-title {
        text-align: center;
        font-size: 1.5rem;
        font-weight: 300;
        margin-bottom: 1.5rem;
        color: #3a4556;
    }
    .calendar-grid {
        display: grid;
        grid-template-columns: repeat(7, minmax(0, 1fr));
        gap: 0.25rem;
        text-align: center;
        font-size: 0.875rem;
    }
    .calendar-weekday {
        font-weight: 500;
        padding: 0.5rem 0;
        color: #667788;
    }
    .calendar-day {
        padding: 0.5rem 0;
        color: #4a5668;
    }
    .calendar-day.wedding-day {
        color: #ffffff;
        font-weight: 700;
        border-radius: 9999px;
        background-color: #5b6b7c;
    }
    .calendar-time {
        text-align: center;
        margin-top: 1.5rem;
        font-weight: 500;
        color: #5b6b7c;
    }

    .map-card {
        padding: 1rem;
        margin-bottom: 2rem;
        overflow: hidden;
    }
    .map-container {
        min-height: 300px;
        max-width: 100%;
        overflow: hidden;
    }
    .root_daum_roughmap {
        width: 100% !important;
        max-width: 100% !important;
        overflow: hidden !important;
        box-sizing: border-box !important;
    }
    .root_daum_roughmap * {
        box-sizing: border-box !important;
    }
    .root_daum_roughmap .wrap_map,
    .root_daum_roughmap .wrap_controllers {
        width: 100% !important;
        max-width: 100% !important;
        overflow: hidden !important;
    }
    .root_daum_roughmap iframe {
        width: 100% !important;
        max-width: 100% !important;
        border-radius: 0.75rem !important;
        border: none !important;
    }
    .root_daum_roughmap .phone {
        display: none;
    }

    .account-toggles {
        display: flex;
        gap: 1rem;
        justify-content: center;
        margin-bottom: 2rem;
    }
    .pill-button {
        padding: 0.75rem 2rem;
        color: #ffffff;
        border: none;
        border-radius: 9999px;
        cursor: pointer;
        transition: transform 0.3s ease, box-shadow 0.3s ease, background-color 0.3s ease;
    }
    .pill-button:hover {
        transform: scale(1.05);
        box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
    }
    .account-drawer {
        max-height: 0;
        opacity: 0;
        overflow: hidden;
        transition: max-height 0.5s ease, opacity 0.5s ease;
    }
    .account-drawer.is-open {
        max-height: 24rem;
        opacity: 1;
        margin-bottom: 1rem;
    }
    .account-card {
        padding: 1.5rem;
    }
    .account-title {
        text-align: center;
        font-weight: 500;
        margin-bottom: 1rem;
        color: #3a4556;
    }
    .account-rows > * + * {
        margin-top: 0.75rem;
    }
    .account-row {
        display: flex;
        justify-content: space-between;
        align-items: center;
        padding: 0.75rem;
        border-radius: 0.5rem;
        color: #3a4556;
        background-color: #f5f5f5;
        transition: background-color 0.2s ease;
    }
    .account-row.is-hovered {
        background-color: #eeeeee;
    }
    .account-copy {
        font-size: 0.875rem;
        color: #5b6b7c;
        background: none;
        border: none;
        cursor: pointer;
        transition: transform 0.2s ease;
    }
    .account-copy:hover {
        transform: scale(1.05);
    }

    .scripture {
        max-width: 24rem;
        margin: 0 auto;
        padding: 2rem;
        text-align: center;
        border-radius: 1rem;
        background-color: #f5f5f5;
    }
    .scripture-text {
        font-style: italic;
        line-height: 1.625;
        color: #3a4556;
    }
    .scripture-source {
        margin-top: 1rem;
        font-size: 0.875rem;
        color: #667788;
    }

    .share-buttons {
        display: flex;
        flex-direction: column;
        gap: 1rem;
        max-width: 20rem;
        margin: 0 auto;
    }
    .share-button {
        display: flex;
        align-items: center;
        justify-content: center;
        gap: 0.5rem;
        padding: 1rem 0;
        border-radius: 0.75rem;
        cursor: pointer;
        transition: transform 0.3s ease, box-shadow 0.3s ease, background-color 0.3s ease;
    }
    .share-kakao {
        border: none;
    }
    .share-button:hover {
        transform: scale(1.05);
        box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
    }
    .share-icon {
        width: 1.25rem;
        height: 1.25rem;
    }

    .invitation-footer {
        padding: 3rem 0;
        text-align: center;
        color: #ffffff;
        font-size: 0.875rem;
        background-color: #3a4556;
    }
    .footer-sub {
        margin-top: 0.5rem;
        font-size: 0.75rem;
        opacity: 0.8;
    }

    .not-found {
        min-height: 100vh;
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: center;
        gap: 1rem;
        color: #3a4556;
        background-color: #eeeeee;
    }

    @keyframes fadeInUp {
        from { opacity: 0; transform: translateY(30px); }
        to { opacity: 1; transform: translateY(0); }
    }
    @keyframes fadeIn {
        from { opacity: 0; }
        to { opacity: 1; }
    }
    @keyframes expandHeight {
        from { height: 0; opacity: 0; }
        to { height: 3rem; opacity: 1; }
    }
    .animate-fade-in-up {
        animation: fadeInUp 0.8s ease-out;
    }
    .animate-fade-in {
        animation: fadeIn 1s ease-out;
        animation-fill-mode: forwards;
    }
    .animate-expand-height {
        animation: expandHeight 0.8s ease-out;
        animation-fill-mode: forwards;
    }
"#;

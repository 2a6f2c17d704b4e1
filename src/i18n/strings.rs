/// All localized user-facing strings for a language.
///
/// The remedy content itself is translated at request time; these are the
/// fixed diagnostics shown around it. Strings are raw text and are
/// HTML-escaped at render time by the form module.
#[derive(Debug, Clone)]
pub struct LanguageStrings {
    /// Warning shown when the form is submitted with unanswered questions
    pub incomplete_form_warning: &'static str,

    /// Notice shown when translation fails and the English text is displayed.
    /// Empty for the canonical language, which never needs a fallback.
    pub translation_failure_notice: &'static str,

    /// Notice shown when speech synthesis fails and no audio is available
    pub narration_failure_notice: &'static str,
}

pub const ENGLISH_STRINGS: LanguageStrings = LanguageStrings {
    incomplete_form_warning: "⚠️ Please answer all questions before submitting.",
    translation_failure_notice: "",
    narration_failure_notice: "⚠️ Audio narration is unavailable.",
};

pub const HINDI_STRINGS: LanguageStrings = LanguageStrings {
    incomplete_form_warning: "⚠️ कृपया सबमिट करने से पहले सभी प्रश्नों के उत्तर दें।",
    translation_failure_notice: "⚠️ अनुवाद विफल रहा। मूल सामग्री अंग्रेज़ी में दिखाई जा रही है।",
    narration_failure_notice: "⚠️ ऑडियो उपलब्ध नहीं है।",
};

pub const MARATHI_STRINGS: LanguageStrings = LanguageStrings {
    incomplete_form_warning: "⚠️ कृपया सबमिट करण्यापूर्वी सर्व प्रश्नांची उत्तरे द्या.",
    translation_failure_notice: "⚠️ भाषांतर अयशस्वी झाले. मूळ मजकूर इंग्रजीत दाखवला जात आहे.",
    narration_failure_notice: "⚠️ ऑडिओ उपलब्ध नाही.",
};

pub const GUJARATI_STRINGS: LanguageStrings = LanguageStrings {
    incomplete_form_warning: "⚠️ કૃપા કરીને સબમિટ કરતા પહેલા બધા પ્રશ્નોના જવાબ આપો.",
    translation_failure_notice: "⚠️ અનુવાદ નિષ્ફળ ગયો. મૂળ સામગ્રી અંગ્રેજીમાં બતાવવામાં આવી રહી છે.",
    narration_failure_notice: "⚠️ ઑડિયો ઉપલબ્ધ નથી.",
};

pub const BENGALI_STRINGS: LanguageStrings = LanguageStrings {
    incomplete_form_warning: "⚠️ অনুগ্রহ করে জমা দেওয়ার আগে সব প্রশ্নের উত্তর দিন।",
    translation_failure_notice: "⚠️ অনুবাদ ব্যর্থ হয়েছে। মূল বিষয়বস্তু ইংরেজিতে দেখানো হচ্ছে।",
    narration_failure_notice: "⚠️ অডিও উপলব্ধ নয়।",
};

pub const TAMIL_STRINGS: LanguageStrings = LanguageStrings {
    incomplete_form_warning: "⚠️ சமர்ப்பிக்கும் முன் அனைத்து கேள்விகளுக்கும் பதிலளிக்கவும்.",
    translation_failure_notice: "⚠️ மொழிபெயர்ப்பு தோல்வியடைந்தது. அசல் உள்ளடக்கம் ஆங்கிலத்தில் காட்டப்படுகிறது.",
    narration_failure_notice: "⚠️ ஒலி கிடைக்கவில்லை.",
};

pub const TELUGU_STRINGS: LanguageStrings = LanguageStrings {
    incomplete_form_warning: "⚠️ దయచేసి సమర్పించే ముందు అన్ని ప్రశ్నలకు సమాధానం ఇవ్వండి.",
    translation_failure_notice: "⚠️ అనువాదం విఫలమైంది. అసలు కంటెంట్ ఇంగ్లీషులో చూపబడుతోంది.",
    narration_failure_notice: "⚠️ ఆడియో అందుబాటులో లేదు.",
};

pub const KANNADA_STRINGS: LanguageStrings = LanguageStrings {
    incomplete_form_warning: "⚠️ ದಯವಿಟ್ಟು ಸಲ್ಲಿಸುವ ಮೊದಲು ಎಲ್ಲಾ ಪ್ರಶ್ನೆಗಳಿಗೆ ಉತ್ತರಿಸಿ.",
    translation_failure_notice: "⚠️ ಅನುವಾದ ವಿಫಲವಾಗಿದೆ. ಮೂಲ ವಿಷಯವನ್ನು ಇಂಗ್ಲಿಷ್‌ನಲ್ಲಿ ತೋರಿಸಲಾಗುತ್ತಿದೆ.",
    narration_failure_notice: "⚠️ ಆಡಿಯೊ ಲಭ್ಯವಿಲ್ಲ.",
};

pub const MALAYALAM_STRINGS: LanguageStrings = LanguageStrings {
    incomplete_form_warning: "⚠️ സമർപ്പിക്കുന്നതിന് മുമ്പ് എല്ലാ ചോദ്യങ്ങൾക്കും ഉത്തരം നൽകുക.",
    translation_failure_notice: "⚠️ വിവർത്തനം പരാജയപ്പെട്ടു. യഥാർത്ഥ ഉള്ളടക്കം ഇംഗ്ലീഷിൽ കാണിക്കുന്നു.",
    narration_failure_notice: "⚠️ ഓഡിയോ ലഭ്യമല്ല.",
};

pub const PUNJABI_STRINGS: LanguageStrings = LanguageStrings {
    incomplete_form_warning: "⚠️ ਕਿਰਪਾ ਕਰਕੇ ਜਮ੍ਹਾਂ ਕਰਨ ਤੋਂ ਪਹਿਲਾਂ ਸਾਰੇ ਸਵਾਲਾਂ ਦੇ ਜਵਾਬ ਦਿਓ।",
    translation_failure_notice: "⚠️ ਅਨੁਵਾਦ ਅਸਫਲ ਰਿਹਾ। ਮੂਲ ਸਮੱਗਰੀ ਅੰਗਰੇਜ਼ੀ ਵਿੱਚ ਦਿਖਾਈ ਜਾ ਰਹੀ ਹੈ।",
    narration_failure_notice: "⚠️ ਆਡੀਓ ਉਪਲਬਧ ਨਹੀਂ ਹੈ।",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_incomplete_warning() {
        assert!(ENGLISH_STRINGS
            .incomplete_form_warning
            .contains("answer all questions"));
    }

    #[test]
    fn test_english_has_no_translation_notice() {
        assert!(ENGLISH_STRINGS.translation_failure_notice.is_empty());
    }

    #[test]
    fn test_hindi_translation_notice_mentions_english_fallback() {
        assert!(HINDI_STRINGS.translation_failure_notice.contains("अंग्रेज़ी"));
    }

    #[test]
    fn test_all_targets_have_nonempty_warnings() {
        for strings in [
            &HINDI_STRINGS,
            &MARATHI_STRINGS,
            &GUJARATI_STRINGS,
            &BENGALI_STRINGS,
            &TAMIL_STRINGS,
            &TELUGU_STRINGS,
            &KANNADA_STRINGS,
            &MALAYALAM_STRINGS,
            &PUNJABI_STRINGS,
        ] {
            assert!(!strings.incomplete_form_warning.is_empty());
            assert!(!strings.translation_failure_notice.is_empty());
            assert!(!strings.narration_failure_notice.is_empty());
        }
    }
}

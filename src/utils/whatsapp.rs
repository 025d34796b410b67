use url::Url;

/// Builds a `https://wa.me/<phone>?text=<message>` deep-link. The link is
/// returned to the client and opened there, the server never calls WhatsApp.
pub fn deep_link(phone: &str, text: &str) -> String {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    let base = format!("https://wa.me/{}", digits);
    match Url::parse_with_params(&base, &[("text", text)]) {
        Ok(url) => url.to_string(),
        // The base is a constant shape, parse only fails on a hostile phone
        // value. Fall back to the bare chat link.
        Err(_) => base,
    }
}

pub fn payment_confirmation_message(order_number: &str, total_amount: i64, sender_name: &str) -> String {
    format!(
        "Halo Admin, saya {} sudah transfer {} untuk pesanan {}. Mohon dicek ya, bukti transfer sudah diupload.",
        sender_name,
        format_rupiah(total_amount),
        order_number
    )
}

pub fn booking_message(name: &str, appointment_date: &str) -> String {
    format!(
        "Halo Admin, saya {} ingin konfirmasi jadwal appointment tanggal {}. Terima kasih.",
        name, appointment_date
    )
}

/// Renders 1500000 as `Rp 1.500.000`.
pub fn format_rupiah(amount: i64) -> String {
    let negative = amount < 0;
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    if negative {
        format!("-Rp {}", grouped)
    } else {
        format!("Rp {}", grouped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deep_link_encodes_message() {
        let link = deep_link("+62 812-3456-7890", "Halo Admin, pesanan ORD-1");
        assert!(link.starts_with("https://wa.me/6281234567890?text="));
        // query pairs are form-urlencoded, spaces become '+'
        assert!(link.contains("Halo+Admin"));
        assert!(!link.contains(' '));
    }

    #[test]
    fn test_format_rupiah() {
        assert_eq!(format_rupiah(0), "Rp 0");
        assert_eq!(format_rupiah(100000), "Rp 100.000");
        assert_eq!(format_rupiah(1500000), "Rp 1.500.000");
        assert_eq!(format_rupiah(999), "Rp 999");
    }

    #[test]
    fn test_payment_message_mentions_order_and_amount() {
        let msg = payment_confirmation_message("ORD-20260804-7KQ2M", 200000, "Budi");
        assert!(msg.contains("ORD-20260804-7KQ2M"));
        assert!(msg.contains("Rp 200.000"));
        assert!(msg.contains("Budi"));
    }
}

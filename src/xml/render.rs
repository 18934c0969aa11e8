use super::writer::{XmlResult, XmlWriter};
use super::{FATTURAPA_NS, XMLDSIG_NS, XSI_NS};
use crate::assemble::*;
use crate::core::FatturaError;

type WriteResult = Result<(), FatturaError>;

/// Render an assembled document as FatturaPA 1.2 XML.
///
/// Absent optional fields are omitted, never written as empty elements.
pub fn to_xml(doc: &Document) -> XmlResult {
    let mut w = XmlWriter::new()?;
    let attrs = [
        ("versione", doc.header.transmission.format.as_str()),
        ("xmlns:ds", XMLDSIG_NS),
        ("xmlns:p", FATTURAPA_NS),
        ("xmlns:xsi", XSI_NS),
    ];
    w.element_with_attrs("p:FatturaElettronica", &attrs, |w| {
        header(w, &doc.header)?;
        body(w, &doc.body)
    })?;
    w.finish()
}

fn header(w: &mut XmlWriter, header: &Header) -> WriteResult {
    w.element("FatturaElettronicaHeader", |w| {
        let dt = &header.transmission;
        w.element("DatiTrasmissione", |w| {
            vat_id(w, "IdTrasmittente", &dt.transmitter)?;
            w.leaf("ProgressivoInvio", &dt.progressive)?;
            w.leaf("FormatoTrasmissione", &dt.format)?;
            w.leaf("CodiceDestinatario", &dt.destination_code)
        })?;
        party(w, "CedentePrestatore", &header.supplier)?;
        party(w, "CessionarioCommittente", &header.customer)
    })
}

fn vat_id(w: &mut XmlWriter, tag: &str, id: &VatId) -> WriteResult {
    w.element(tag, |w| {
        w.leaf("IdPaese", &id.country)?;
        w.leaf("IdCodice", &id.code)
    })
}

fn party(w: &mut XmlWriter, tag: &str, party: &PartyBlock) -> WriteResult {
    w.element(tag, |w| {
        w.element("DatiAnagrafici", |w| {
            match &party.identity {
                FiscalIdentity::VatId(id) => vat_id(w, "IdFiscaleIVA", id)?,
                FiscalIdentity::FiscalCode(code) => w.leaf("CodiceFiscale", code)?,
            }
            let name = &party.name;
            w.element("Anagrafica", |w| {
                w.leaf("Denominazione", &name.organization)?;
                w.optional_leaf("Nome", name.given.as_deref())?;
                w.optional_leaf("Cognome", name.surname.as_deref())?;
                w.optional_leaf("Titolo", name.title.as_deref())
            })?;
            w.optional_leaf("RegimeFiscale", party.tax_regime.as_deref())
        })?;

        if let Some(addr) = &party.address {
            w.element("Sede", |w| {
                w.leaf("Indirizzo", &addr.street)?;
                w.optional_leaf("NumeroCivico", addr.number.as_deref())?;
                w.leaf("CAP", &addr.postal_code)?;
                w.leaf("Comune", &addr.locality)?;
                w.optional_leaf("Provincia", addr.province.as_deref())?;
                w.leaf("Nazione", &addr.country)
            })?;
        }

        match &party.registration {
            Some(rea) => w.element("IscrizioneREA", |w| {
                w.leaf("Ufficio", &rea.office)?;
                w.leaf("NumeroREA", &rea.number)?;
                w.optional_leaf("CapitaleSociale", rea.capital.as_deref())?;
                w.leaf("StatoLiquidazione", &rea.liquidation_status)
            }),
            None => Ok(()),
        }
    })
}

fn body(w: &mut XmlWriter, body: &Body) -> WriteResult {
    w.element("FatturaElettronicaBody", |w| {
        general(w, &body.general)?;
        goods_services(w, &body.goods_services)?;
        match &body.payment {
            Some(payment) => payment_data(w, payment),
            None => Ok(()),
        }
    })
}

fn general(w: &mut XmlWriter, g: &GeneralData) -> WriteResult {
    w.element("DatiGenerali", |w| {
        w.element("DatiGeneraliDocumento", |w| {
            w.leaf("TipoDocumento", &g.document_type)?;
            w.leaf("Divisa", &g.currency)?;
            w.leaf("Data", &g.date.to_string())?;
            w.leaf("Numero", &g.number)?;
            for r in &g.retained_taxes {
                w.element("DatiRitenuta", |w| {
                    w.leaf("TipoRitenuta", &r.withholding_type)?;
                    w.leaf("ImportoRitenuta", &r.amount)?;
                    w.leaf("AliquotaRitenuta", &r.rate)?;
                    w.leaf("CausalePagamento", &r.payment_reason)
                })?;
            }
            g.reasons.iter().try_for_each(|reason| w.leaf("Causale", reason))
        })
    })
}

fn goods_services(w: &mut XmlWriter, data: &GoodsServicesData) -> WriteResult {
    w.element("DatiBeniServizi", |w| {
        for line in &data.lines {
            w.element("DettaglioLinee", |w| {
                w.leaf("NumeroLinea", &line.number.to_string())?;
                w.leaf("Descrizione", &line.description)?;
                w.leaf("Quantita", &line.quantity)?;
                w.leaf("PrezzoUnitario", &line.unit_price)?;
                w.leaf("PrezzoTotale", &line.total_price)?;
                w.optional_leaf("AliquotaIVA", line.vat_rate.as_deref())
            })?;
        }
        data.summary.iter().try_for_each(|row| {
            w.element("DatiRiepilogo", |w| {
                w.leaf("AliquotaIVA", &row.vat_rate)?;
                w.leaf("ImponibileImporto", &row.taxable_amount)?;
                w.leaf("Imposta", &row.tax_amount)?;
                w.leaf("EsigibilitaIVA", &row.vat_exigibility)
            })
        })
    })
}

fn payment_data(w: &mut XmlWriter, payment: &PaymentData) -> WriteResult {
    w.element("DatiPagamento", |w| {
        w.leaf("CondizioniPagamento", &payment.condition)?;
        payment.details.iter().try_for_each(|detail| {
            w.element("DettaglioPagamento", |w| {
                w.leaf("ModalitaPagamento", &detail.method)?;
                let due = detail.due_date.map(|d| d.to_string());
                w.optional_leaf("DataScadenzaPagamento", due.as_deref())?;
                w.leaf("ImportoPagamento", &detail.amount)
            })
        })
    })
}

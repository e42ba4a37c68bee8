use approx::assert_relative_eq;
use psd_evaporation::{fit_efficiency, Campaign, CampaignReport, QuadrupoleTrap, Samples};
use std::error::Error;

#[test]
fn plug_stabilized_sequence() -> Result<(), Box<dyn Error>> {
    let n = [400e6, 19.8e6, 4e6, 0.75e6];
    let t = [350e-6, 43.7e-6, 20.1e-6, 8e-6];
    let samples = Samples::from_columns(&n, &t, 260.7e2, 1)?;
    let trap = QuadrupoleTrap::default();

    let psd = trap.psds(&samples);
    let expected_psd = [
        4.5523241888148524e-07,
        0.00026240863035174926,
        0.0017464538885130975,
        0.020684056360220446,
    ];
    let density = trap.densities(&samples);
    let expected_density = [
        6.238132891972341e+16,
        1.586425358971551e+18,
        3.293597946054904e+18,
        9.794675820678003e+18,
    ];
    let collision_rate = trap.collision_rates(&samples);
    let expected_collision_rate = [
        2.9713383022208575,
        26.70077202220511,
        37.59517135306986,
        70.53400052987293,
    ];
    for k in 0..n.len() {
        assert_relative_eq!(psd[k], expected_psd[k], max_relative = 1e-9);
        assert_relative_eq!(density[k], expected_density[k], max_relative = 1e-9);
        assert_relative_eq!(
            collision_rate[k],
            expected_collision_rate[k],
            max_relative = 1e-9
        );
    }
    // the temperature drops faster than the atom number
    assert!(psd.windows(2).all(|w| w[1] > w[0]));

    let fit = fit_efficiency(&n, &psd)?;
    assert_relative_eq!(fit.slope, -1.7017079863284168, epsilon = 1e-8);
    assert_relative_eq!(fit.intercept, 19.527308108732612, epsilon = 1e-7);
    Ok(())
}

#[test]
fn current_campaign_table() -> Result<(), Box<dyn Error>> {
    let reports = CampaignReport::all(&QuadrupoleTrap::default())?;
    let current = reports
        .iter()
        .find(|r| r.campaign == Campaign::default())
        .ok_or("missing current campaign")?;
    let expected = [
        (7.963714553974668e-08, 0.26605348094242703, 1.7055993864950387),
        (6.454086158340545e-07, 0.9302870769913654, 4.506451797258371),
        (8.775292333724384e-07, 1.1109335747234041, 5.15371728341266),
        (1.4881368007866434e-06, 1.5062993195754277, 6.485713395424405),
        (5.128942615795467e-06, 2.549043325168045, 8.658659770005903),
        (4.8271626085327854e-06, 2.298690267269817, 7.697806062240818),
        (5.453928818862258e-06, 2.4411303549843217, 8.007712491882108),
        (6.199634511593605e-06, 2.576742918472458, 8.24637521163787),
        (5.172667827376522e-06, 2.068783506271349, 6.536403625831371),
    ];
    let density = current.density_1e11_per_cc().ok_or("missing density")?;
    let collision_rate = current.collision_rate.as_ref().ok_or("missing rate")?;
    for (k, &(psd, n_0, gamma)) in expected.iter().enumerate() {
        assert_relative_eq!(current.psd[k], psd, max_relative = 1e-9);
        assert_relative_eq!(density[k], n_0, max_relative = 1e-9);
        assert_relative_eq!(collision_rate[k], gamma, max_relative = 1e-9);
    }
    assert_relative_eq!(current.fit.slope, -1.7021892409191015, epsilon = 1e-8);
    assert_relative_eq!(current.fit.intercept, 20.07409271153948, epsilon = 1e-7);
    Ok(())
}
